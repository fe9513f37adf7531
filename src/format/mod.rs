//! Pixel format catalog and GPU format translation.
//!
//! [`PixelFormat`] is the abstract, platform-neutral format vocabulary shared
//! by image decoders and texture builders. The catalog describes every
//! recognized format: uncompressed formats get a [`PixelDesc`] (channel
//! layout), block-compressed formats a [`BlockSize`]. [`translate_to_gl`]
//! maps a format onto the concrete descriptor a graphics context consumes,
//! branching on the target [`Profile`]'s capabilities.
//!
//! Tables are fixed at compile time; catalog state is read-only for the
//! process lifetime, so decoding workers may consult it from any thread.

pub mod gl;
mod translate;

pub use translate::{
    GlFormat, Profile, ProfileCaps, translate_from_gl, translate_to_gl, translate_to_gl_default,
    type_size,
};

use crate::errors::{EmberError, Result};

// ─── PixelFormat ─────────────────────────────────────────────────────────────

/// Abstract pixel format, drawn from two disjoint contiguous code ranges:
/// uncompressed formats (`0..=16`) and block-compressed formats (`32..=41`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    // Uncompressed range
    R8 = 0,
    Rg8 = 1,
    Rgb8 = 2,
    Rgba8 = 3,
    Srgb8 = 4,
    Srgba8 = 5,
    R16 = 6,
    Rg16 = 7,
    Rgba16 = 8,
    R16f = 9,
    Rg16f = 10,
    Rgb16f = 11,
    Rgba16f = 12,
    R32f = 13,
    Rg32f = 14,
    Rgb32f = 15,
    Rgba32f = 16,
    // Compressed range
    Bc1Rgb = 32,
    Bc1Rgba = 33,
    Bc2 = 34,
    Bc3 = 35,
    Bc4 = 36,
    Bc5 = 37,
    Bc7 = 38,
    Etc2Rgb8 = 39,
    Etc2Rgba8 = 40,
    Astc4x4 = 41,
}

/// First code of the uncompressed range.
pub const UNCOMPRESSED_FIRST: u32 = 0;
/// First code of the compressed range.
pub const COMPRESSED_FIRST: u32 = 32;

impl PixelFormat {
    /// Every recognized format, uncompressed range first.
    pub const ALL: [PixelFormat; 27] = [
        PixelFormat::R8,
        PixelFormat::Rg8,
        PixelFormat::Rgb8,
        PixelFormat::Rgba8,
        PixelFormat::Srgb8,
        PixelFormat::Srgba8,
        PixelFormat::R16,
        PixelFormat::Rg16,
        PixelFormat::Rgba16,
        PixelFormat::R16f,
        PixelFormat::Rg16f,
        PixelFormat::Rgb16f,
        PixelFormat::Rgba16f,
        PixelFormat::R32f,
        PixelFormat::Rg32f,
        PixelFormat::Rgb32f,
        PixelFormat::Rgba32f,
        PixelFormat::Bc1Rgb,
        PixelFormat::Bc1Rgba,
        PixelFormat::Bc2,
        PixelFormat::Bc3,
        PixelFormat::Bc4,
        PixelFormat::Bc5,
        PixelFormat::Bc7,
        PixelFormat::Etc2Rgb8,
        PixelFormat::Etc2Rgba8,
        PixelFormat::Astc4x4,
    ];

    /// Numeric format code.
    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Recovers a format from its numeric code.
    #[must_use]
    pub fn from_code(code: u32) -> Option<PixelFormat> {
        PixelFormat::ALL.into_iter().find(|f| f.code() == code)
    }

    /// Whether the format lies in the block-compressed range.
    #[must_use]
    pub fn is_compressed(self) -> bool {
        self.code() >= COMPRESSED_FIRST
    }

    /// Tight byte size of one mip level of `width` × `height` texels.
    ///
    /// Compressed formats round each dimension up to whole blocks, matching
    /// what the texture-resource builder must allocate and upload.
    pub fn data_size(self, width: u32, height: u32) -> Result<u64> {
        if self.is_compressed() {
            let block = block_size(self)?;
            let blocks_x = u64::from(width.div_ceil(u32::from(block.width)));
            let blocks_y = u64::from(height.div_ceil(u32::from(block.height)));
            Ok(blocks_x * blocks_y * u64::from(block.bytes))
        } else {
            let desc = pixel_desc(self)?;
            Ok(u64::from(width) * u64::from(height) * u64::from(desc.packed_bytes))
        }
    }
}

// ─── Catalog entries ─────────────────────────────────────────────────────────

/// Channel layout of an uncompressed pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelDesc {
    /// Channel count, 1 to 4.
    pub channels: u8,
    /// Bits per channel.
    pub bits_per_channel: u8,
    /// Byte size of one packed texel.
    pub packed_bytes: u8,
    /// Channels carry signed values.
    pub signed: bool,
    /// Channels are floating point.
    pub float: bool,
}

/// Block layout of a compressed pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSize {
    /// Block width in texels.
    pub width: u8,
    /// Block height in texels.
    pub height: u8,
    /// Byte size of one encoded block.
    pub bytes: u8,
}

const fn desc(channels: u8, bits: u8, signed: bool, float: bool) -> PixelDesc {
    PixelDesc {
        channels,
        bits_per_channel: bits,
        packed_bytes: channels * bits / 8,
        signed,
        float,
    }
}

const fn block(width: u8, height: u8, bytes: u8) -> BlockSize {
    BlockSize {
        width,
        height,
        bytes,
    }
}

/// Layout table for the uncompressed range, indexed by `code − UNCOMPRESSED_FIRST`.
const PIXEL_DESCS: [PixelDesc; 17] = [
    desc(1, 8, false, false),  // R8
    desc(2, 8, false, false),  // Rg8
    desc(3, 8, false, false),  // Rgb8
    desc(4, 8, false, false),  // Rgba8
    desc(3, 8, false, false),  // Srgb8
    desc(4, 8, false, false),  // Srgba8
    desc(1, 16, false, false), // R16
    desc(2, 16, false, false), // Rg16
    desc(4, 16, false, false), // Rgba16
    desc(1, 16, true, true),   // R16f
    desc(2, 16, true, true),   // Rg16f
    desc(3, 16, true, true),   // Rgb16f
    desc(4, 16, true, true),   // Rgba16f
    desc(1, 32, true, true),   // R32f
    desc(2, 32, true, true),   // Rg32f
    desc(3, 32, true, true),   // Rgb32f
    desc(4, 32, true, true),   // Rgba32f
];

/// Block table for the compressed range, indexed by `code − COMPRESSED_FIRST`.
const BLOCK_SIZES: [BlockSize; 10] = [
    block(4, 4, 8),  // Bc1Rgb
    block(4, 4, 8),  // Bc1Rgba
    block(4, 4, 16), // Bc2
    block(4, 4, 16), // Bc3
    block(4, 4, 8),  // Bc4
    block(4, 4, 16), // Bc5
    block(4, 4, 16), // Bc7
    block(4, 4, 8),  // Etc2Rgb8
    block(4, 4, 16), // Etc2Rgba8
    block(4, 4, 16), // Astc4x4
];

// ─── Catalog lookups ─────────────────────────────────────────────────────────

/// Channel layout of an uncompressed format.
///
/// Handing in a block-compressed format is a caller bug and is surfaced as
/// [`EmberError::FormatOutOfRange`] rather than an out-of-bounds read.
pub fn pixel_desc(format: PixelFormat) -> Result<PixelDesc> {
    if format.is_compressed() {
        return Err(EmberError::FormatOutOfRange {
            format,
            expected: "uncompressed",
        });
    }
    Ok(PIXEL_DESCS[(format.code() - UNCOMPRESSED_FIRST) as usize])
}

/// Block layout of a compressed format.
///
/// Handing in an uncompressed format is surfaced as
/// [`EmberError::FormatOutOfRange`].
pub fn block_size(format: PixelFormat) -> Result<BlockSize> {
    if !format.is_compressed() {
        return Err(EmberError::FormatOutOfRange {
            format,
            expected: "compressed",
        });
    }
    Ok(BLOCK_SIZES[(format.code() - COMPRESSED_FIRST) as usize])
}
