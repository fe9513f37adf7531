//! Effect variant resolution.
//!
//! A *variant* is one compiled rendering program for one canonical capability
//! combination. [`EffectRegistry::resolve`] is the single entry point: it
//! validates the combination, derives the [`EffectVariantKey`], and either
//! returns the already-registered effect or composes, compiles and registers
//! a new one (plus a depth-only shadow variant when the surface receives
//! shadows).
//!
//! The registry is owned by the engine/context instance and mutated only on
//! the thread that owns the graphics context; there is no process-global
//! state and no internal locking.

mod compiler;
mod fragments;
mod key;
mod registry;

pub use compiler::{EffectCompiler, WgpuEffectCompiler};
pub use fragments::{compose, compose_shadow};
pub use key::{EffectVariantKey, VariantInputs};
pub use registry::{CompiledEffect, EffectRegistry, ResolvedEffect, validate};
