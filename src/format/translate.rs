//! Abstract-to-concrete format translation.
//!
//! A [`Profile`] describes what the target graphics context can do; the
//! translator branches on those capabilities, not just on the format. Contexts
//! without sRGB decode get the linear layout (gamma decode moves into the
//! shading stage), contexts without channel swizzle get a four-channel layout
//! in place of one- and two-channel formats.

use bitflags::bitflags;

use crate::errors::{EmberError, Result};
use crate::format::gl;
use crate::format::PixelFormat;

bitflags! {
    /// Capabilities of a target graphics context that affect translation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ProfileCaps: u32 {
        /// The context decodes sRGB internal formats on sample.
        const SRGB_DECODE     = 1 << 0;
        /// The context supports texture channel swizzling, so narrow
        /// one/two-channel layouts are usable directly.
        const CHANNEL_SWIZZLE = 1 << 1;
    }
}

/// Capability description of the target graphics context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    pub caps: ProfileCaps,
}

impl Profile {
    /// The most capable assumed profile (modern desktop context).
    #[must_use]
    pub fn modern() -> Self {
        Self {
            caps: ProfileCaps::all(),
        }
    }

    /// A minimal legacy profile: no sRGB decode, no channel swizzle.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            caps: ProfileCaps::empty(),
        }
    }

    #[must_use]
    pub fn supports_srgb_decode(&self) -> bool {
        self.caps.contains(ProfileCaps::SRGB_DECODE)
    }

    #[must_use]
    pub fn supports_channel_swizzle(&self) -> bool {
        self.caps.contains(ProfileCaps::CHANNEL_SWIZZLE)
    }
}

/// Concrete format descriptor a GL-family graphics context consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlFormat {
    /// Sized (or compressed) internal format code.
    pub internal: u32,
    /// External / transfer format code.
    pub external: u32,
    /// Base internal format code.
    pub base_internal: u32,
    /// Scalar type code of one transfer element.
    pub ty: u32,
}

const fn glf(internal: u32, external: u32, base_internal: u32, ty: u32) -> GlFormat {
    GlFormat {
        internal,
        external,
        base_internal,
        ty,
    }
}

/// Canonical (modern-profile) descriptor for every format.
fn canonical_gl(format: PixelFormat) -> GlFormat {
    match format {
        PixelFormat::R8 => glf(gl::GL_R8, gl::GL_RED, gl::GL_RED, gl::GL_UNSIGNED_BYTE),
        PixelFormat::Rg8 => glf(gl::GL_RG8, gl::GL_RG, gl::GL_RG, gl::GL_UNSIGNED_BYTE),
        PixelFormat::Rgb8 => glf(gl::GL_RGB8, gl::GL_RGB, gl::GL_RGB, gl::GL_UNSIGNED_BYTE),
        PixelFormat::Rgba8 => glf(gl::GL_RGBA8, gl::GL_RGBA, gl::GL_RGBA, gl::GL_UNSIGNED_BYTE),
        PixelFormat::Srgb8 => glf(gl::GL_SRGB8, gl::GL_RGB, gl::GL_RGB, gl::GL_UNSIGNED_BYTE),
        PixelFormat::Srgba8 => glf(gl::GL_SRGB8_ALPHA8, gl::GL_RGBA, gl::GL_RGBA, gl::GL_UNSIGNED_BYTE),
        PixelFormat::R16 => glf(gl::GL_R16, gl::GL_RED, gl::GL_RED, gl::GL_UNSIGNED_SHORT),
        PixelFormat::Rg16 => glf(gl::GL_RG16, gl::GL_RG, gl::GL_RG, gl::GL_UNSIGNED_SHORT),
        PixelFormat::Rgba16 => glf(gl::GL_RGBA16, gl::GL_RGBA, gl::GL_RGBA, gl::GL_UNSIGNED_SHORT),
        PixelFormat::R16f => glf(gl::GL_R16F, gl::GL_RED, gl::GL_RED, gl::GL_HALF_FLOAT),
        PixelFormat::Rg16f => glf(gl::GL_RG16F, gl::GL_RG, gl::GL_RG, gl::GL_HALF_FLOAT),
        PixelFormat::Rgb16f => glf(gl::GL_RGB16F, gl::GL_RGB, gl::GL_RGB, gl::GL_HALF_FLOAT),
        PixelFormat::Rgba16f => glf(gl::GL_RGBA16F, gl::GL_RGBA, gl::GL_RGBA, gl::GL_HALF_FLOAT),
        PixelFormat::R32f => glf(gl::GL_R32F, gl::GL_RED, gl::GL_RED, gl::GL_FLOAT),
        PixelFormat::Rg32f => glf(gl::GL_RG32F, gl::GL_RG, gl::GL_RG, gl::GL_FLOAT),
        PixelFormat::Rgb32f => glf(gl::GL_RGB32F, gl::GL_RGB, gl::GL_RGB, gl::GL_FLOAT),
        PixelFormat::Rgba32f => glf(gl::GL_RGBA32F, gl::GL_RGBA, gl::GL_RGBA, gl::GL_FLOAT),
        PixelFormat::Bc1Rgb => glf(
            gl::GL_COMPRESSED_RGB_S3TC_DXT1_EXT,
            gl::GL_RGB,
            gl::GL_RGB,
            gl::GL_UNSIGNED_BYTE,
        ),
        PixelFormat::Bc1Rgba => glf(
            gl::GL_COMPRESSED_RGBA_S3TC_DXT1_EXT,
            gl::GL_RGBA,
            gl::GL_RGBA,
            gl::GL_UNSIGNED_BYTE,
        ),
        PixelFormat::Bc2 => glf(
            gl::GL_COMPRESSED_RGBA_S3TC_DXT3_EXT,
            gl::GL_RGBA,
            gl::GL_RGBA,
            gl::GL_UNSIGNED_BYTE,
        ),
        PixelFormat::Bc3 => glf(
            gl::GL_COMPRESSED_RGBA_S3TC_DXT5_EXT,
            gl::GL_RGBA,
            gl::GL_RGBA,
            gl::GL_UNSIGNED_BYTE,
        ),
        PixelFormat::Bc4 => glf(gl::GL_COMPRESSED_RED_RGTC1, gl::GL_RED, gl::GL_RED, gl::GL_UNSIGNED_BYTE),
        PixelFormat::Bc5 => glf(gl::GL_COMPRESSED_RG_RGTC2, gl::GL_RG, gl::GL_RG, gl::GL_UNSIGNED_BYTE),
        PixelFormat::Bc7 => glf(
            gl::GL_COMPRESSED_RGBA_BPTC_UNORM,
            gl::GL_RGBA,
            gl::GL_RGBA,
            gl::GL_UNSIGNED_BYTE,
        ),
        PixelFormat::Etc2Rgb8 => glf(gl::GL_COMPRESSED_RGB8_ETC2, gl::GL_RGB, gl::GL_RGB, gl::GL_UNSIGNED_BYTE),
        PixelFormat::Etc2Rgba8 => glf(
            gl::GL_COMPRESSED_RGBA8_ETC2_EAC,
            gl::GL_RGBA,
            gl::GL_RGBA,
            gl::GL_UNSIGNED_BYTE,
        ),
        PixelFormat::Astc4x4 => glf(
            gl::GL_COMPRESSED_RGBA_ASTC_4X4_KHR,
            gl::GL_RGBA,
            gl::GL_RGBA,
            gl::GL_UNSIGNED_BYTE,
        ),
    }
}

/// Substitution applied before the canonical lookup when the profile cannot
/// represent the requested format directly.
fn effective_format(format: PixelFormat, profile: &Profile) -> PixelFormat {
    let format = if profile.supports_srgb_decode() {
        format
    } else {
        // Linear substitute; gamma decode happens in the shading stage.
        match format {
            PixelFormat::Srgb8 => PixelFormat::Rgb8,
            PixelFormat::Srgba8 => PixelFormat::Rgba8,
            other => other,
        }
    };

    if profile.supports_channel_swizzle() {
        return format;
    }
    // Without swizzle support the narrow layouts are not addressable from the
    // shading stage; substitute the four-channel layout of the same depth.
    match format {
        PixelFormat::R8 | PixelFormat::Rg8 => PixelFormat::Rgba8,
        PixelFormat::R16 | PixelFormat::Rg16 => PixelFormat::Rgba16,
        PixelFormat::R16f | PixelFormat::Rg16f => PixelFormat::Rgba16f,
        PixelFormat::R32f | PixelFormat::Rg32f => PixelFormat::Rgba32f,
        other => other,
    }
}

/// Translates an abstract format into the descriptor the given context consumes.
pub fn translate_to_gl(format: PixelFormat, profile: &Profile) -> Result<GlFormat> {
    Ok(canonical_gl(effective_format(format, profile)))
}

/// Profile-less overload of [`translate_to_gl`]; assumes [`Profile::modern`].
pub fn translate_to_gl_default(format: PixelFormat) -> Result<GlFormat> {
    translate_to_gl(format, &Profile::modern())
}

/// Inverse lookup from a device-reported descriptor back to the abstract
/// format.
///
/// The scan compares against the modern-profile translation of every
/// recognized format, so `translate_from_gl(translate_to_gl(f, modern)) == f`
/// holds for all of them. Descriptors produced under degraded profiles map
/// back to the substituted format.
#[must_use]
pub fn translate_from_gl(
    internal: u32,
    external: u32,
    base_internal: u32,
    ty: u32,
) -> Option<PixelFormat> {
    let probe = glf(internal, external, base_internal, ty);
    PixelFormat::ALL
        .into_iter()
        .find(|&f| canonical_gl(f) == probe)
}

/// Byte width of one element of a scalar type code.
///
/// Consistent with [`PixelDesc::packed_bytes`]: for every uncompressed format
/// `packed_bytes == channels × type_size(external type)`.
///
/// [`PixelDesc::packed_bytes`]: crate::format::PixelDesc
pub fn type_size(ty: u32) -> Result<u32> {
    match ty {
        gl::GL_BYTE | gl::GL_UNSIGNED_BYTE => Ok(1),
        gl::GL_SHORT | gl::GL_UNSIGNED_SHORT | gl::GL_HALF_FLOAT => Ok(2),
        gl::GL_INT | gl::GL_UNSIGNED_INT | gl::GL_FLOAT => Ok(4),
        other => Err(EmberError::UnknownTypeCode(other)),
    }
}
