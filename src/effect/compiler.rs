//! Effect compilation seam.
//!
//! [`EffectCompiler`] is the single compilation entry point the resolver
//! hands assembled shader source to. [`WgpuEffectCompiler`] is the concrete
//! backend: it deduplicates compiled `wgpu::ShaderModule`s by hashing the
//! final WGSL source with xxh3-128, and surfaces validation failures as
//! [`EmberError::CompilationFailure`] instead of letting them reach the
//! device's uncaptured-error handler.

use rustc_hash::FxHashMap;
use xxhash_rust::xxh3::xxh3_128;

use crate::errors::{EmberError, Result};

/// Compiles assembled shader source into a GPU program.
///
/// Compilation must be deterministic and bounded; implementations are free to
/// deduplicate identical sources. The returned value is the xxh3-128 hash of
/// the source, usable as a stable artifact id.
pub trait EffectCompiler {
    fn compile(&mut self, label: &str, source: &str) -> Result<u128>;
}

/// `wgpu`-backed effect compiler with a module cache.
///
/// Owned by the thread that owns the graphics context; `compile` must only be
/// called from that thread.
pub struct WgpuEffectCompiler {
    device: wgpu::Device,
    /// xxh3-128 of final WGSL → compiled module.
    modules: FxHashMap<u128, wgpu::ShaderModule>,
}

impl WgpuEffectCompiler {
    #[must_use]
    pub fn new(device: wgpu::Device) -> Self {
        Self {
            device,
            modules: FxHashMap::default(),
        }
    }

    /// Retrieve a compiled module by the hash [`compile`] returned.
    ///
    /// [`compile`]: EffectCompiler::compile
    #[must_use]
    pub fn module(&self, hash: u128) -> Option<&wgpu::ShaderModule> {
        self.modules.get(&hash)
    }

    /// Number of cached shader modules.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

impl EffectCompiler for WgpuEffectCompiler {
    fn compile(&mut self, label: &str, source: &str) -> Result<u128> {
        let hash = xxh3_128(source.as_bytes());
        if self.modules.contains_key(&hash) {
            return Ok(hash);
        }

        // Catch validation errors here; the templates are internally
        // consistent, so a failure is fatal for the current build step.
        let error_scope = self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        if let Some(error) = pollster::block_on(error_scope.pop()) {
            return Err(EmberError::CompilationFailure {
                label: label.to_string(),
                message: error.to_string(),
            });
        }

        self.modules.insert(hash, module);
        Ok(hash)
    }
}
