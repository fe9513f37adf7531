//! Effect variant registry and resolution.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::caps::{MaterialCaps, SurfaceCaps, TextureSlot, UvSet, VertexCaps};
use crate::effect::compiler::EffectCompiler;
use crate::effect::fragments;
use crate::effect::key::{EffectVariantKey, VariantInputs};
use crate::errors::{EmberError, Result};

/// One compiled shading variant. Created at most once per distinct key and
/// never mutated afterwards; lives as long as the owning registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledEffect {
    /// Name of the forward-shading program.
    pub name: String,
    /// Name of the depth-only shadow-pass program, when the surface receives
    /// shadows.
    pub shadow_name: Option<String>,
    /// xxh3-128 hash of the forward-shading source.
    pub source_hash: u128,
}

impl CompiledEffect {
    fn resolved(&self) -> ResolvedEffect {
        ResolvedEffect {
            name: self.name.clone(),
            shadow_name: self.shadow_name.clone(),
        }
    }
}

/// Name pair handed to the render-pass binding step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEffect {
    pub name: String,
    pub shadow_name: Option<String>,
}

/// Checks a capability combination against the resolver's validation rules.
///
/// Violations are caller bugs or loader-data mismatches, never panics.
pub fn validate(inputs: &VariantInputs) -> Result<()> {
    if inputs.material.has_normal_map() && !inputs.vertex.has_tangent() {
        return Err(EmberError::InvalidFlagCombination(
            "normal map requires the tangent attribute",
        ));
    }
    for slot in TextureSlot::ALL {
        match inputs.material.map_uv(slot) {
            Some(UvSet::Uv0) if !inputs.vertex.has_texcoord() => {
                return Err(EmberError::InvalidFlagCombination(
                    "texture map on UV set 0 requires the texcoord attribute",
                ));
            }
            Some(UvSet::Uv1) if !inputs.vertex.has_texcoord2() => {
                return Err(EmberError::InvalidFlagCombination(
                    "texture map on UV set 1 requires the texcoord2 attribute",
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Append-only registry of compiled shading variants.
///
/// Owned by the engine/context instance and passed by reference wherever
/// resolution happens; only the thread owning the graphics context may
/// insert. Entries are never evicted.
#[derive(Debug, Default)]
pub struct EffectRegistry {
    effects: FxHashMap<EffectVariantKey, CompiledEffect>,
}

impl EffectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered variants.
    #[must_use]
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// The registered variant for a key, if any.
    #[must_use]
    pub fn get(&self, key: &EffectVariantKey) -> Option<&CompiledEffect> {
        self.effects.get(key)
    }

    /// Resolves a capability combination to a compiled effect.
    ///
    /// Returns `Ok(None)` when the combination fails validation. On a registry
    /// hit the cached name pair is returned unchanged; repeated calls with
    /// equal inputs never recompile and never allocate a new entry. On a miss
    /// the shading source is composed and compiled, a shadow-pass variant is
    /// added when the surface receives shadows, and the result is registered
    /// under the canonical key.
    pub fn resolve(
        &mut self,
        compiler: &mut dyn EffectCompiler,
        surface: SurfaceCaps,
        material: MaterialCaps,
        vertex: VertexCaps,
        use_env_light: bool,
    ) -> Result<Option<ResolvedEffect>> {
        let inputs = VariantInputs {
            surface,
            material,
            vertex,
            use_env_light,
        };

        if let Err(rejection) = validate(&inputs) {
            debug!("skipping effect resolution: {rejection}");
            return Ok(None);
        }

        let key = EffectVariantKey::derive(&inputs);
        if let Some(effect) = self.effects.get(&key) {
            trace!("effect registry hit for '{key}'");
            return Ok(Some(effect.resolved()));
        }

        let name = format!("pbr_{key}");
        debug!("compiling effect variant '{name}'");
        let source = fragments::compose(&inputs);
        let source_hash = compiler.compile(&name, &source)?;

        let shadow_name = if inputs.surface.receives_shadow() {
            let shadow_name = format!("shadow_{key}");
            debug!("compiling shadow variant '{shadow_name}'");
            let shadow_source = fragments::compose_shadow(&inputs);
            compiler.compile(&shadow_name, &shadow_source)?;
            Some(shadow_name)
        } else {
            None
        };

        let effect = CompiledEffect {
            name,
            shadow_name,
            source_hash,
        };
        let resolved = effect.resolved();
        self.effects.insert(key, effect);
        Ok(Some(resolved))
    }
}
