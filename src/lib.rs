//! Ember rendering core.
//!
//! Two tightly coupled subsystems make up this crate:
//!
//! - **Effect variant resolution** ([`effect`]): turns a material's declared
//!   capabilities into a compiled, cached rendering effect. Each distinct
//!   capability combination is compiled exactly once per [`EffectRegistry`].
//! - **Pixel format translation** ([`format`]): maps abstract [`PixelFormat`]s
//!   onto the concrete format descriptors a graphics context consumes,
//!   branching on the target [`Profile`]'s capabilities.
//!
//! Scene traversal, asset loading, windowing and image decoding live in
//! collaborating crates; this core only sees the capability records and
//! abstract formats they produce.

pub mod caps;
pub mod effect;
pub mod errors;
pub mod format;

pub use caps::{MaterialCaps, SurfaceCaps, TextureSlot, UvSet, VertexCaps};
pub use effect::{
    CompiledEffect, EffectCompiler, EffectRegistry, EffectVariantKey, ResolvedEffect,
    VariantInputs, WgpuEffectCompiler,
};
pub use errors::{EmberError, Result};
pub use format::{
    BlockSize, GlFormat, PixelDesc, PixelFormat, Profile, ProfileCaps, block_size, pixel_desc,
    translate_from_gl, translate_to_gl, translate_to_gl_default, type_size,
};
