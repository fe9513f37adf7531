//! Material capability record.

/// UV coordinate set a texture slot samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UvSet {
    #[default]
    Uv0,
    Uv1,
}

impl UvSet {
    /// Numeric index of the set (0 or 1).
    #[must_use]
    pub fn index(self) -> u32 {
        match self {
            UvSet::Uv0 => 0,
            UvSet::Uv1 => 1,
        }
    }

    /// Digit appended to a slot letter in `abbrev()` output.
    #[must_use]
    pub fn suffix_char(self) -> char {
        match self {
            UvSet::Uv0 => '0',
            UvSet::Uv1 => '1',
        }
    }
}

/// Optional texture slots a material may bind, in fixed declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Diffuse,
    Occlusion,
    Normal,
    MetallicRoughness,
    Emissive,
}

impl TextureSlot {
    /// All slots in the order used for key derivation and shader composition.
    pub const ALL: [TextureSlot; 5] = [
        TextureSlot::Diffuse,
        TextureSlot::Occlusion,
        TextureSlot::Normal,
        TextureSlot::MetallicRoughness,
        TextureSlot::Emissive,
    ];

    /// One-letter abbreviation, unique per slot.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            TextureSlot::Diffuse => 'd',
            TextureSlot::Occlusion => 'o',
            TextureSlot::Normal => 'n',
            TextureSlot::MetallicRoughness => 'r',
            TextureSlot::Emissive => 'e',
        }
    }
}

/// Texture-map and blend capabilities declared by a material.
///
/// Each texture slot records the UV set it samples from; `None` means the map
/// is absent, so a UV assignment cannot exist without its map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaterialCaps {
    pub diffuse_map: Option<UvSet>,
    pub occlusion_map: Option<UvSet>,
    pub normal_map: Option<UvSet>,
    pub metallic_roughness_map: Option<UvSet>,
    pub emissive_map: Option<UvSet>,
    pub blended: bool,
    pub alpha_cutoff: bool,
    pub unlit: bool,
    pub double_sided: bool,
}

impl MaterialCaps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the record to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn enable_diffuse_map(&mut self, uv: UvSet) {
        self.diffuse_map = Some(uv);
    }

    pub fn enable_occlusion_map(&mut self, uv: UvSet) {
        self.occlusion_map = Some(uv);
    }

    pub fn enable_normal_map(&mut self, uv: UvSet) {
        self.normal_map = Some(uv);
    }

    pub fn enable_metallic_roughness_map(&mut self, uv: UvSet) {
        self.metallic_roughness_map = Some(uv);
    }

    pub fn enable_emissive_map(&mut self, uv: UvSet) {
        self.emissive_map = Some(uv);
    }

    #[must_use]
    pub fn has_diffuse_map(&self) -> bool {
        self.diffuse_map.is_some()
    }

    #[must_use]
    pub fn has_occlusion_map(&self) -> bool {
        self.occlusion_map.is_some()
    }

    #[must_use]
    pub fn has_normal_map(&self) -> bool {
        self.normal_map.is_some()
    }

    #[must_use]
    pub fn has_metallic_roughness_map(&self) -> bool {
        self.metallic_roughness_map.is_some()
    }

    #[must_use]
    pub fn has_emissive_map(&self) -> bool {
        self.emissive_map.is_some()
    }

    /// UV assignment of a slot, `None` when the map is absent.
    #[must_use]
    pub fn map_uv(&self, slot: TextureSlot) -> Option<UvSet> {
        match slot {
            TextureSlot::Diffuse => self.diffuse_map,
            TextureSlot::Occlusion => self.occlusion_map,
            TextureSlot::Normal => self.normal_map,
            TextureSlot::MetallicRoughness => self.metallic_roughness_map,
            TextureSlot::Emissive => self.emissive_map,
        }
    }

    /// Deterministic short encoding of the record.
    ///
    /// Enabled maps emit their slot letter followed by the UV digit; boolean
    /// capabilities emit one letter each. Order is fixed, letters are unique,
    /// so distinct records never collide.
    #[must_use]
    pub fn abbrev(&self) -> String {
        let mut out = String::with_capacity(14);
        for slot in TextureSlot::ALL {
            if let Some(uv) = self.map_uv(slot) {
                out.push(slot.letter());
                out.push(uv.suffix_char());
            }
        }
        if self.blended {
            out.push('b');
        }
        if self.alpha_cutoff {
            out.push('a');
        }
        if self.unlit {
            out.push('u');
        }
        if self.double_sided {
            out.push('x');
        }
        out
    }
}
