//! Capability Record Tests
//!
//! Tests for:
//! - MaterialCaps / VertexCaps / SurfaceCaps: enable, predicates, clear
//! - abbrev(): injectivity over every representable record value
//! - EffectVariantKey: component separation keeps full keys collision-free

use std::collections::HashSet;

use ember::effect::{EffectVariantKey, VariantInputs};
use ember::{MaterialCaps, SurfaceCaps, TextureSlot, UvSet, VertexCaps};

/// Every representable MaterialCaps value: 3 states per texture slot,
/// 2 states per boolean capability.
fn all_material_caps() -> Vec<MaterialCaps> {
    let uv_states = [None, Some(UvSet::Uv0), Some(UvSet::Uv1)];
    let mut out = Vec::new();
    for d in uv_states {
        for o in uv_states {
            for n in uv_states {
                for r in uv_states {
                    for e in uv_states {
                        for bits in 0u8..16 {
                            out.push(MaterialCaps {
                                diffuse_map: d,
                                occlusion_map: o,
                                normal_map: n,
                                metallic_roughness_map: r,
                                emissive_map: e,
                                blended: bits & 1 != 0,
                                alpha_cutoff: bits & 2 != 0,
                                unlit: bits & 4 != 0,
                                double_sided: bits & 8 != 0,
                            });
                        }
                    }
                }
            }
        }
    }
    out
}

fn all_vertex_caps() -> Vec<VertexCaps> {
    (0u8..64)
        .map(|bits| VertexCaps {
            normal: bits & 1 != 0,
            tangent: bits & 2 != 0,
            texcoord: bits & 4 != 0,
            texcoord2: bits & 8 != 0,
            color: bits & 16 != 0,
            skin: bits & 32 != 0,
        })
        .collect()
}

fn all_surface_caps() -> Vec<SurfaceCaps> {
    (0u8..4)
        .map(|bits| SurfaceCaps {
            srgb_encoding: bits & 1 != 0,
            receives_shadow: bits & 2 != 0,
        })
        .collect()
}

// ============================================================================
// Enable / predicate / clear semantics
// ============================================================================

#[test]
fn material_caps_default_is_empty() {
    let caps = MaterialCaps::new();
    assert!(!caps.has_diffuse_map());
    assert!(!caps.has_normal_map());
    assert_eq!(caps.abbrev(), "");
}

#[test]
fn material_caps_enable_records_uv_set() {
    let mut caps = MaterialCaps::new();
    caps.enable_diffuse_map(UvSet::Uv1);
    caps.enable_normal_map(UvSet::Uv0);

    assert!(caps.has_diffuse_map());
    assert_eq!(caps.map_uv(TextureSlot::Diffuse), Some(UvSet::Uv1));
    assert_eq!(caps.map_uv(TextureSlot::Normal), Some(UvSet::Uv0));
    assert_eq!(caps.map_uv(TextureSlot::Emissive), None);
}

#[test]
fn material_caps_clear_resets_everything() {
    let mut caps = MaterialCaps::new();
    caps.enable_emissive_map(UvSet::Uv0);
    caps.blended = true;
    caps.clear();
    assert_eq!(caps, MaterialCaps::default());
}

#[test]
fn vertex_caps_enable_and_clear() {
    let mut caps = VertexCaps::new();
    caps.enable_tangent();
    caps.enable_skin();
    assert!(caps.has_tangent());
    assert!(caps.has_skin());
    assert!(!caps.has_color());

    caps.clear();
    assert_eq!(caps, VertexCaps::default());
}

#[test]
fn surface_caps_enable_and_predicates() {
    let mut caps = SurfaceCaps::new();
    assert!(!caps.receives_shadow());
    caps.enable_srgb_encoding();
    caps.enable_receives_shadow();
    assert!(caps.is_srgb_encoding());
    assert!(caps.receives_shadow());
}

#[test]
fn uv_set_indices() {
    assert_eq!(UvSet::Uv0.index(), 0);
    assert_eq!(UvSet::Uv1.index(), 1);
}

// ============================================================================
// Abbrev injectivity
// ============================================================================

#[test]
fn material_abbrev_is_injective_over_all_values() {
    let all = all_material_caps();
    let mut seen = HashSet::new();
    for caps in &all {
        assert!(
            seen.insert(caps.abbrev()),
            "abbrev collision for {caps:?}: '{}'",
            caps.abbrev()
        );
    }
    assert_eq!(seen.len(), all.len());
}

#[test]
fn material_abbrev_distinguishes_uv_assignments() {
    let mut uv0 = MaterialCaps::new();
    uv0.enable_diffuse_map(UvSet::Uv0);
    let mut uv1 = MaterialCaps::new();
    uv1.enable_diffuse_map(UvSet::Uv1);
    assert_ne!(uv0.abbrev(), uv1.abbrev());
}

#[test]
fn vertex_abbrev_is_injective_over_all_values() {
    let mut seen = HashSet::new();
    for caps in all_vertex_caps() {
        assert!(seen.insert(caps.abbrev()), "abbrev collision for {caps:?}");
    }
    assert_eq!(seen.len(), 64);
}

#[test]
fn surface_abbrev_is_injective_over_all_values() {
    let mut seen = HashSet::new();
    for caps in all_surface_caps() {
        assert!(seen.insert(caps.abbrev()), "abbrev collision for {caps:?}");
    }
    assert_eq!(seen.len(), 4);
}

// ============================================================================
// Key derivation
// ============================================================================

#[test]
fn variant_keys_are_collision_free_across_components() {
    // Texture-slot assignments crossed with every vertex/surface/env state.
    // Boolean material capabilities are covered by the per-component test.
    let uv_states = [None, Some(UvSet::Uv0), Some(UvSet::Uv1)];
    let mut seen = HashSet::new();
    let mut total = 0usize;
    for d in uv_states {
        for n in uv_states {
            for e in uv_states {
                let material = MaterialCaps {
                    diffuse_map: d,
                    normal_map: n,
                    emissive_map: e,
                    ..MaterialCaps::default()
                };
                for vertex in all_vertex_caps() {
                    for surface in all_surface_caps() {
                        for use_env_light in [false, true] {
                            let key = EffectVariantKey::derive(&VariantInputs {
                                surface,
                                material,
                                vertex,
                                use_env_light,
                            });
                            assert!(seen.insert(key.as_str().to_string()));
                            total += 1;
                        }
                    }
                }
            }
        }
    }
    assert_eq!(seen.len(), total);
}

#[test]
fn key_component_boundaries_do_not_merge() {
    // Surface 'g' + empty material must differ from empty surface + a material
    // that would otherwise produce the same concatenation.
    let srgb_surface = SurfaceCaps {
        srgb_encoding: true,
        ..SurfaceCaps::default()
    };
    let key_a = EffectVariantKey::derive(&VariantInputs {
        surface: srgb_surface,
        material: MaterialCaps::default(),
        vertex: VertexCaps::default(),
        use_env_light: false,
    });
    let key_b = EffectVariantKey::derive(&VariantInputs {
        surface: SurfaceCaps::default(),
        material: MaterialCaps::default(),
        vertex: VertexCaps::default(),
        use_env_light: false,
    });
    assert_ne!(key_a, key_b);
    assert_eq!(key_a.as_str(), "g...-");
    assert_eq!(key_b.as_str(), "...-");
}

#[test]
fn env_light_marker_changes_the_key() {
    let inputs = VariantInputs {
        surface: SurfaceCaps::default(),
        material: MaterialCaps::default(),
        vertex: VertexCaps::default(),
        use_env_light: false,
    };
    let lit = VariantInputs {
        use_env_light: true,
        ..inputs
    };
    assert_ne!(
        EffectVariantKey::derive(&inputs),
        EffectVariantKey::derive(&lit)
    );
}
