//! Canonical variant keys.

use std::fmt;

use crate::caps::{MaterialCaps, SurfaceCaps, VertexCaps};

/// Everything that observably shapes a shading variant.
///
/// Shared by validation, key derivation and fragment composition so the three
/// can never disagree about what a variant is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantInputs {
    pub surface: SurfaceCaps,
    pub material: MaterialCaps,
    pub vertex: VertexCaps,
    /// Include environment lighting terms in the fragment stage.
    pub use_env_light: bool,
}

/// Canonical cache key of one shading variant.
///
/// Derived from the capability abbreviations plus the environment-light
/// marker. Components are dot-separated: each `abbrev()` is injective on its
/// own, and the separator keeps the concatenation injective across component
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectVariantKey {
    text: String,
}

impl EffectVariantKey {
    /// Derives the key for a capability combination.
    #[must_use]
    pub fn derive(inputs: &VariantInputs) -> Self {
        let env_marker = if inputs.use_env_light { "e" } else { "-" };
        let text = format!(
            "{}.{}.{}.{}",
            inputs.surface.abbrev(),
            inputs.material.abbrev(),
            inputs.vertex.abbrev(),
            env_marker,
        );
        Self { text }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for EffectVariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
