//! Surface-effect capability record.

/// Surface-effect switches applied on top of the material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceCaps {
    /// Encode the final color to sRGB in the fragment stage.
    pub srgb_encoding: bool,
    /// Sample the shadow map; also requests a depth-only shadow-pass variant.
    pub receives_shadow: bool,
}

impl SurfaceCaps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the record to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn enable_srgb_encoding(&mut self) {
        self.srgb_encoding = true;
    }

    pub fn enable_receives_shadow(&mut self) {
        self.receives_shadow = true;
    }

    #[must_use]
    pub fn is_srgb_encoding(&self) -> bool {
        self.srgb_encoding
    }

    #[must_use]
    pub fn receives_shadow(&self) -> bool {
        self.receives_shadow
    }

    /// Deterministic short encoding: one fixed letter per enabled switch.
    #[must_use]
    pub fn abbrev(&self) -> String {
        let mut out = String::with_capacity(2);
        if self.srgb_encoding {
            out.push('g');
        }
        if self.receives_shadow {
            out.push('s');
        }
        out
    }
}
