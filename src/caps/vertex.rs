//! Vertex attribute capability record.

/// Vertex attributes available in a geometry's vertex streams.
///
/// Position is always present and therefore not recorded. Skinning selects the
/// skinned vertex-stage code path and is folded into the variant key like any
/// other attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexCaps {
    pub normal: bool,
    pub tangent: bool,
    pub texcoord: bool,
    pub texcoord2: bool,
    pub color: bool,
    pub skin: bool,
}

impl VertexCaps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the record to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn enable_normal(&mut self) {
        self.normal = true;
    }

    pub fn enable_tangent(&mut self) {
        self.tangent = true;
    }

    pub fn enable_texcoord(&mut self) {
        self.texcoord = true;
    }

    pub fn enable_texcoord2(&mut self) {
        self.texcoord2 = true;
    }

    pub fn enable_color(&mut self) {
        self.color = true;
    }

    pub fn enable_skin(&mut self) {
        self.skin = true;
    }

    #[must_use]
    pub fn has_normal(&self) -> bool {
        self.normal
    }

    #[must_use]
    pub fn has_tangent(&self) -> bool {
        self.tangent
    }

    #[must_use]
    pub fn has_texcoord(&self) -> bool {
        self.texcoord
    }

    #[must_use]
    pub fn has_texcoord2(&self) -> bool {
        self.texcoord2
    }

    #[must_use]
    pub fn has_color(&self) -> bool {
        self.color
    }

    #[must_use]
    pub fn has_skin(&self) -> bool {
        self.skin
    }

    /// Deterministic short encoding: one fixed letter per present attribute.
    #[must_use]
    pub fn abbrev(&self) -> String {
        let mut out = String::with_capacity(6);
        if self.normal {
            out.push('n');
        }
        if self.tangent {
            out.push('t');
        }
        if self.texcoord {
            out.push('u');
        }
        if self.texcoord2 {
            out.push('v');
        }
        if self.color {
            out.push('c');
        }
        if self.skin {
            out.push('k');
        }
        out
    }
}
