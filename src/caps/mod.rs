//! Capability records.
//!
//! Three independent record types describe which optional features a material,
//! vertex stream, or surface effect supports. They are built transiently while
//! a loader parses a material description, handed to the effect resolver, and
//! discarded after resolution.
//!
//! Each record exposes an `abbrev()` encoder producing a deterministic short
//! string: one fixed letter per enabled feature, emitted in declaration order
//! (texture-map letters carry their UV-set digit). Distinct record values
//! always yield distinct strings; the encoding is the sole material for
//! effect cache keys.

mod material;
mod surface;
mod vertex;

pub use material::{MaterialCaps, TextureSlot, UvSet};
pub use surface::SurfaceCaps;
pub use vertex::VertexCaps;
