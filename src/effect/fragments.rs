//! Declarative shader-fragment composition.
//!
//! Variant shading code is assembled from a fixed, ordered table of optional
//! WGSL fragments, each gated by one capability predicate. [`compose`] walks
//! the table once in declaration order; a chunk either applies (and emits) or
//! is skipped entirely, so disabled stages leave no trace in the output. The
//! shadow-pass variant shares the vertex-stage geometry chunks and swaps the
//! surface chunks for a minimal depth-only fragment stage.

use smallvec::SmallVec;

use crate::caps::{TextureSlot, UvSet};
use crate::effect::key::VariantInputs;

/// One optional shader fragment, gated by a capability predicate.
struct Fragment {
    name: &'static str,
    applies: fn(&VariantInputs) -> bool,
    emit: fn(&VariantInputs, &mut String),
}

fn always(_: &VariantInputs) -> bool {
    true
}

// ─── Shared chunks: uniforms and bindings ────────────────────────────────────

fn emit_camera_uniforms(_: &VariantInputs, out: &mut String) {
    out.push_str(
        "struct CameraUniforms {\n\
         \x20   view_proj: mat4x4<f32>,\n\
         \x20   camera_pos: vec3<f32>,\n\
         \x20   _pad: f32,\n\
         }\n\
         @group(0) @binding(0) var<uniform> camera: CameraUniforms;\n\n",
    );
}

fn emit_object_uniforms(_: &VariantInputs, out: &mut String) {
    out.push_str(
        "struct ModelUniforms {\n\
         \x20   model: mat4x4<f32>,\n\
         \x20   normal_matrix: mat4x4<f32>,\n\
         }\n\
         @group(2) @binding(0) var<uniform> object: ModelUniforms;\n\n",
    );
}

fn emit_skinning_bindings(_: &VariantInputs, out: &mut String) {
    out.push_str(
        "@group(2) @binding(1) var<storage, read> joint_matrices: array<mat4x4<f32>>;\n\n",
    );
}

fn emit_env_light_bindings(_: &VariantInputs, out: &mut String) {
    out.push_str(
        "@group(0) @binding(1) var t_env_irradiance: texture_cube<f32>;\n\
         @group(0) @binding(2) var s_env: sampler;\n\n",
    );
}

fn emit_shadow_bindings(_: &VariantInputs, out: &mut String) {
    out.push_str(
        "@group(0) @binding(3) var t_shadow: texture_depth_2d;\n\
         @group(0) @binding(4) var s_shadow: sampler_comparison;\n\
         @group(0) @binding(5) var<uniform> light_view_proj: mat4x4<f32>;\n\n",
    );
}

/// Fixed texture/sampler binding pair per slot; declarations are only emitted
/// for enabled maps, bindings stay stable across variants.
fn slot_bindings(slot: TextureSlot) -> (u32, u32, &'static str) {
    match slot {
        TextureSlot::Diffuse => (0, 1, "diffuse"),
        TextureSlot::Occlusion => (2, 3, "occlusion"),
        TextureSlot::Normal => (4, 5, "normal"),
        TextureSlot::MetallicRoughness => (6, 7, "metallic_roughness"),
        TextureSlot::Emissive => (8, 9, "emissive"),
    }
}

fn has_any_map(inputs: &VariantInputs) -> bool {
    TextureSlot::ALL
        .into_iter()
        .any(|slot| inputs.material.map_uv(slot).is_some())
}

fn emit_material_bindings(inputs: &VariantInputs, out: &mut String) {
    use std::fmt::Write;
    for slot in TextureSlot::ALL {
        if inputs.material.map_uv(slot).is_some() {
            let (tex, samp, name) = slot_bindings(slot);
            let _ = writeln!(out, "@group(1) @binding({tex}) var t_{name}: texture_2d<f32>;");
            let _ = writeln!(out, "@group(1) @binding({samp}) var s_{name}: sampler;");
        }
    }
    out.push('\n');
}

// ─── Vertex stage ────────────────────────────────────────────────────────────

fn emit_vertex_io(inputs: &VariantInputs, out: &mut String) {
    let v = &inputs.vertex;
    out.push_str("struct VertexInput {\n    @location(0) position: vec3<f32>,\n");
    if v.normal {
        out.push_str("    @location(1) normal: vec3<f32>,\n");
    }
    if v.tangent {
        out.push_str("    @location(2) tangent: vec4<f32>,\n");
    }
    if v.texcoord {
        out.push_str("    @location(3) uv: vec2<f32>,\n");
    }
    if v.texcoord2 {
        out.push_str("    @location(4) uv2: vec2<f32>,\n");
    }
    if v.color {
        out.push_str("    @location(5) color: vec4<f32>,\n");
    }
    if v.skin {
        out.push_str(
            "    @location(6) joints: vec4<u32>,\n    @location(7) weights: vec4<f32>,\n",
        );
    }
    out.push_str("}\n\n");

    out.push_str(
        "struct VertexOutput {\n\
         \x20   @builtin(position) clip_pos: vec4<f32>,\n\
         \x20   @location(0) world_pos: vec3<f32>,\n",
    );
    if v.normal {
        out.push_str("    @location(1) normal: vec3<f32>,\n");
    }
    if v.tangent {
        out.push_str("    @location(2) tangent: vec4<f32>,\n");
    }
    if v.texcoord {
        out.push_str("    @location(3) uv: vec2<f32>,\n");
    }
    if v.texcoord2 {
        out.push_str("    @location(4) uv2: vec2<f32>,\n");
    }
    if v.color {
        out.push_str("    @location(5) color: vec4<f32>,\n");
    }
    out.push_str("}\n\n");
}

fn emit_vs_skin_matrix(_: &VariantInputs, out: &mut String) {
    out.push_str(
        "fn skin_matrix(in: VertexInput) -> mat4x4<f32> {\n\
         \x20   return joint_matrices[in.joints.x] * in.weights.x\n\
         \x20        + joint_matrices[in.joints.y] * in.weights.y\n\
         \x20        + joint_matrices[in.joints.z] * in.weights.z\n\
         \x20        + joint_matrices[in.joints.w] * in.weights.w;\n\
         }\n\n",
    );
}

fn emit_vs_main(inputs: &VariantInputs, out: &mut String) {
    let v = &inputs.vertex;
    out.push_str("@vertex\nfn vs_main(in: VertexInput) -> VertexOutput {\n");
    if v.skin {
        out.push_str("    let world_matrix = object.model * skin_matrix(in);\n");
    } else {
        out.push_str("    let world_matrix = object.model;\n");
    }
    out.push_str(
        "    var out: VertexOutput;\n\
         \x20   let world_pos = world_matrix * vec4<f32>(in.position, 1.0);\n\
         \x20   out.world_pos = world_pos.xyz;\n\
         \x20   out.clip_pos = camera.view_proj * world_pos;\n",
    );
    if v.normal {
        out.push_str(
            "    out.normal = normalize((object.normal_matrix * vec4<f32>(in.normal, 0.0)).xyz);\n",
        );
    }
    if v.tangent {
        out.push_str(
            "    out.tangent = vec4<f32>(normalize((world_matrix * vec4<f32>(in.tangent.xyz, 0.0)).xyz), in.tangent.w);\n",
        );
    }
    if v.texcoord {
        out.push_str("    out.uv = in.uv;\n");
    }
    if v.texcoord2 {
        out.push_str("    out.uv2 = in.uv2;\n");
    }
    if v.color {
        out.push_str("    out.color = in.color;\n");
    }
    out.push_str("    return out;\n}\n\n");
}

// ─── Fragment stage ──────────────────────────────────────────────────────────

/// WGSL expression selecting the interpolated coordinates of a UV set.
fn uv_expr(uv: UvSet) -> &'static str {
    match uv {
        UvSet::Uv0 => "in.uv",
        UvSet::Uv1 => "in.uv2",
    }
}

fn emit_fs_prologue(_: &VariantInputs, out: &mut String) {
    out.push_str(
        "@fragment\n\
         fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {\n\
         \x20   var base_color = vec4<f32>(1.0);\n",
    );
}

fn emit_fs_diffuse(inputs: &VariantInputs, out: &mut String) {
    if let Some(uv) = inputs.material.diffuse_map {
        out.push_str("    base_color = textureSample(t_diffuse, s_diffuse, ");
        out.push_str(uv_expr(uv));
        out.push_str(");\n");
    }
}

fn emit_fs_vertex_color(_: &VariantInputs, out: &mut String) {
    out.push_str("    base_color = base_color * in.color;\n");
}

fn emit_fs_alpha_cutoff(_: &VariantInputs, out: &mut String) {
    out.push_str("    if base_color.a < 0.5 {\n        discard;\n    }\n");
}

fn emit_fs_normal(inputs: &VariantInputs, out: &mut String) {
    if let Some(uv) = inputs.material.normal_map {
        out.push_str("    let bitangent = cross(in.normal, in.tangent.xyz) * in.tangent.w;\n");
        out.push_str("    let tbn = mat3x3<f32>(in.tangent.xyz, bitangent, in.normal);\n");
        out.push_str("    let sampled_normal = textureSample(t_normal, s_normal, ");
        out.push_str(uv_expr(uv));
        out.push_str(").xyz * 2.0 - 1.0;\n    let n = normalize(tbn * sampled_normal);\n");
    } else {
        out.push_str("    let n = normalize(in.normal);\n");
    }
}

fn emit_fs_metallic_roughness(inputs: &VariantInputs, out: &mut String) {
    if let Some(uv) = inputs.material.metallic_roughness_map {
        out.push_str("    let mr = textureSample(t_metallic_roughness, s_metallic_roughness, ");
        out.push_str(uv_expr(uv));
        out.push_str(");\n    let metallic = mr.b;\n    let roughness = mr.g;\n");
    } else {
        out.push_str("    let metallic = 0.0;\n    let roughness = 1.0;\n");
    }
}

fn emit_fs_lighting(inputs: &VariantInputs, out: &mut String) {
    out.push_str(
        "    let view_dir = normalize(camera.camera_pos - in.world_pos);\n\
         \x20   let light_dir = normalize(vec3<f32>(0.5, 1.0, 0.3));\n\
         \x20   let n_dot_l = max(dot(n, light_dir), 0.0);\n\
         \x20   let specular = pow(max(dot(n, normalize(light_dir + view_dir)), 0.0), mix(64.0, 4.0, roughness));\n\
         \x20   var lit = base_color.rgb * n_dot_l + vec3<f32>(specular * mix(0.04, 1.0, metallic));\n",
    );
    if inputs.use_env_light {
        out.push_str(
            "    let irradiance = textureSample(t_env_irradiance, s_env, n).rgb;\n\
             \x20   lit = lit + base_color.rgb * irradiance;\n",
        );
    }
}

fn emit_fs_unlit(_: &VariantInputs, out: &mut String) {
    out.push_str("    var lit = base_color.rgb;\n");
}

fn emit_fs_occlusion(inputs: &VariantInputs, out: &mut String) {
    if let Some(uv) = inputs.material.occlusion_map {
        out.push_str("    let ao = textureSample(t_occlusion, s_occlusion, ");
        out.push_str(uv_expr(uv));
        out.push_str(").r;\n    lit = lit * ao;\n");
    }
}

fn emit_fs_shadow(_: &VariantInputs, out: &mut String) {
    out.push_str(
        "    let shadow_pos = light_view_proj * vec4<f32>(in.world_pos, 1.0);\n\
         \x20   let shadow_uv = shadow_pos.xy / shadow_pos.w * vec2<f32>(0.5, -0.5) + 0.5;\n\
         \x20   let shadow = textureSampleCompare(t_shadow, s_shadow, shadow_uv, shadow_pos.z / shadow_pos.w - 0.002);\n\
         \x20   lit = lit * mix(0.3, 1.0, shadow);\n",
    );
}

fn emit_fs_emissive(inputs: &VariantInputs, out: &mut String) {
    if let Some(uv) = inputs.material.emissive_map {
        out.push_str("    lit = lit + textureSample(t_emissive, s_emissive, ");
        out.push_str(uv_expr(uv));
        out.push_str(").rgb;\n");
    }
}

fn emit_fs_srgb_encode(_: &VariantInputs, out: &mut String) {
    out.push_str("    lit = pow(lit, vec3<f32>(1.0 / 2.2));\n");
}

fn emit_fs_epilogue(_: &VariantInputs, out: &mut String) {
    out.push_str("    return vec4<f32>(lit, base_color.a);\n}\n");
}

// ─── Composition tables ──────────────────────────────────────────────────────

/// Forward-shading fragment table, walked once per composition in this order.
static FRAGMENTS: &[Fragment] = &[
    Fragment {
        name: "camera_uniforms",
        applies: always,
        emit: emit_camera_uniforms,
    },
    Fragment {
        name: "env_light_bindings",
        applies: |i| i.use_env_light && !i.material.unlit,
        emit: emit_env_light_bindings,
    },
    Fragment {
        name: "shadow_bindings",
        applies: |i| i.surface.receives_shadow,
        emit: emit_shadow_bindings,
    },
    Fragment {
        name: "material_bindings",
        applies: has_any_map,
        emit: emit_material_bindings,
    },
    Fragment {
        name: "object_uniforms",
        applies: always,
        emit: emit_object_uniforms,
    },
    Fragment {
        name: "skinning_bindings",
        applies: |i| i.vertex.skin,
        emit: emit_skinning_bindings,
    },
    Fragment {
        name: "vertex_io",
        applies: always,
        emit: emit_vertex_io,
    },
    Fragment {
        name: "skin_matrix",
        applies: |i| i.vertex.skin,
        emit: emit_vs_skin_matrix,
    },
    Fragment {
        name: "vs_main",
        applies: always,
        emit: emit_vs_main,
    },
    Fragment {
        name: "fs_prologue",
        applies: always,
        emit: emit_fs_prologue,
    },
    Fragment {
        name: "fs_diffuse",
        applies: |i| i.material.has_diffuse_map(),
        emit: emit_fs_diffuse,
    },
    Fragment {
        name: "fs_vertex_color",
        applies: |i| i.vertex.color,
        emit: emit_fs_vertex_color,
    },
    Fragment {
        name: "fs_alpha_cutoff",
        applies: |i| i.material.alpha_cutoff,
        emit: emit_fs_alpha_cutoff,
    },
    Fragment {
        name: "fs_normal",
        applies: |i| i.vertex.normal && !i.material.unlit,
        emit: emit_fs_normal,
    },
    Fragment {
        name: "fs_metallic_roughness",
        applies: |i| i.vertex.normal && !i.material.unlit,
        emit: emit_fs_metallic_roughness,
    },
    Fragment {
        name: "fs_lighting",
        applies: |i| i.vertex.normal && !i.material.unlit,
        emit: emit_fs_lighting,
    },
    Fragment {
        name: "fs_unlit",
        applies: |i| !(i.vertex.normal && !i.material.unlit),
        emit: emit_fs_unlit,
    },
    Fragment {
        name: "fs_occlusion",
        applies: |i| i.material.has_occlusion_map(),
        emit: emit_fs_occlusion,
    },
    Fragment {
        name: "fs_shadow",
        applies: |i| i.surface.receives_shadow,
        emit: emit_fs_shadow,
    },
    Fragment {
        name: "fs_emissive",
        applies: |i| i.material.has_emissive_map(),
        emit: emit_fs_emissive,
    },
    Fragment {
        name: "fs_srgb_encode",
        applies: |i| i.surface.srgb_encoding,
        emit: emit_fs_srgb_encode,
    },
    Fragment {
        name: "fs_epilogue",
        applies: always,
        emit: emit_fs_epilogue,
    },
];

fn emit_shadow_fs(_: &VariantInputs, out: &mut String) {
    out.push_str("@fragment\nfn fs_main(in: VertexOutput) {\n}\n");
}

/// Depth-only shadow-pass table: same vertex-stage geometry chunks, minimal
/// fragment stage.
static SHADOW_FRAGMENTS: &[Fragment] = &[
    Fragment {
        name: "camera_uniforms",
        applies: always,
        emit: emit_camera_uniforms,
    },
    Fragment {
        name: "object_uniforms",
        applies: always,
        emit: emit_object_uniforms,
    },
    Fragment {
        name: "skinning_bindings",
        applies: |i| i.vertex.skin,
        emit: emit_skinning_bindings,
    },
    Fragment {
        name: "vertex_io",
        applies: always,
        emit: emit_vertex_io,
    },
    Fragment {
        name: "skin_matrix",
        applies: |i| i.vertex.skin,
        emit: emit_vs_skin_matrix,
    },
    Fragment {
        name: "vs_main",
        applies: always,
        emit: emit_vs_main,
    },
    Fragment {
        name: "shadow_fs",
        applies: always,
        emit: emit_shadow_fs,
    },
];

fn compose_from(table: &[Fragment], inputs: &VariantInputs) -> String {
    let mut source = String::with_capacity(2048);
    let mut applied: SmallVec<[&str; 16]> = SmallVec::new();
    for fragment in table {
        if (fragment.applies)(inputs) {
            (fragment.emit)(inputs, &mut source);
            applied.push(fragment.name);
        }
    }
    log::trace!("composed shader from fragments: {applied:?}");
    source
}

/// Assembles the forward-shading source for a capability combination.
#[must_use]
pub fn compose(inputs: &VariantInputs) -> String {
    compose_from(FRAGMENTS, inputs)
}

/// Assembles the depth-only shadow-pass source for a capability combination.
#[must_use]
pub fn compose_shadow(inputs: &VariantInputs) -> String {
    compose_from(SHADOW_FRAGMENTS, inputs)
}
