//! Pixel Format Tests
//!
//! Tests for:
//! - Catalog: PixelDesc / BlockSize table contents and range checking
//! - PixelFormat: code round-trips, data_size block rounding
//! - Translator: GL round-trip under the modern profile, profile fallbacks
//!   (sRGB decode, channel swizzle), scalar type sizes

use ember::format::{COMPRESSED_FIRST, UNCOMPRESSED_FIRST, gl};
use ember::{
    EmberError, PixelFormat, Profile, ProfileCaps, block_size, pixel_desc, translate_from_gl,
    translate_to_gl, translate_to_gl_default, type_size,
};

fn uncompressed_formats() -> Vec<PixelFormat> {
    PixelFormat::ALL
        .into_iter()
        .filter(|f| !f.is_compressed())
        .collect()
}

fn compressed_formats() -> Vec<PixelFormat> {
    PixelFormat::ALL
        .into_iter()
        .filter(|f| f.is_compressed())
        .collect()
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn pixel_desc_ranges_are_sane() {
    for format in uncompressed_formats() {
        let desc = pixel_desc(format).unwrap();
        assert!(
            (1..=4).contains(&desc.channels),
            "{format:?}: channels {}",
            desc.channels
        );
        assert!(
            [8, 16, 32].contains(&desc.bits_per_channel),
            "{format:?}: bits {}",
            desc.bits_per_channel
        );
        assert_eq!(
            desc.packed_bytes,
            desc.channels * desc.bits_per_channel / 8,
            "{format:?}: packed size inconsistent"
        );
    }
}

#[test]
fn float_formats_are_signed() {
    for format in uncompressed_formats() {
        let desc = pixel_desc(format).unwrap();
        if desc.float {
            assert!(desc.signed, "{format:?}: float formats carry sign");
        }
    }
}

#[test]
fn block_sizes_are_sane() {
    for format in compressed_formats() {
        let block = block_size(format).unwrap();
        assert_eq!(block.width, 4, "{format:?}");
        assert_eq!(block.height, 4, "{format:?}");
        assert!(
            block.bytes == 8 || block.bytes == 16,
            "{format:?}: {} bytes per block",
            block.bytes
        );
    }
}

#[test]
fn pixel_desc_rejects_compressed_formats() {
    let err = pixel_desc(PixelFormat::Bc3).unwrap_err();
    assert!(matches!(
        err,
        EmberError::FormatOutOfRange {
            format: PixelFormat::Bc3,
            expected: "uncompressed",
        }
    ));
}

#[test]
fn block_size_rejects_uncompressed_formats() {
    let err = block_size(PixelFormat::Rgba8).unwrap_err();
    assert!(matches!(
        err,
        EmberError::FormatOutOfRange {
            format: PixelFormat::Rgba8,
            expected: "compressed",
        }
    ));
}

#[test]
fn format_codes_round_trip() {
    for format in PixelFormat::ALL {
        assert_eq!(PixelFormat::from_code(format.code()), Some(format));
    }
    // Gap between the two ranges and codes past the end are unassigned.
    assert_eq!(PixelFormat::from_code(17), None);
    assert_eq!(PixelFormat::from_code(31), None);
    assert_eq!(PixelFormat::from_code(42), None);
}

#[test]
fn ranges_are_disjoint_and_contiguous() {
    assert!(UNCOMPRESSED_FIRST < COMPRESSED_FIRST);
    for format in PixelFormat::ALL {
        assert_eq!(
            format.is_compressed(),
            format.code() >= COMPRESSED_FIRST,
            "{format:?}"
        );
    }
}

#[test]
fn data_size_uncompressed_is_tight() {
    assert_eq!(PixelFormat::Rgba8.data_size(4, 4).unwrap(), 64);
    assert_eq!(PixelFormat::R8.data_size(7, 3).unwrap(), 21);
    assert_eq!(PixelFormat::Rgba32f.data_size(2, 2).unwrap(), 64);
}

#[test]
fn data_size_compressed_rounds_to_whole_blocks() {
    // 5×5 texels cover 2×2 blocks.
    assert_eq!(PixelFormat::Bc1Rgb.data_size(5, 5).unwrap(), 4 * 8);
    assert_eq!(PixelFormat::Etc2Rgba8.data_size(4, 4).unwrap(), 16);
    assert_eq!(PixelFormat::Bc7.data_size(1, 1).unwrap(), 16);
}

// ============================================================================
// Translator
// ============================================================================

#[test]
fn round_trip_under_modern_profile() {
    let profile = Profile::modern();
    for format in PixelFormat::ALL {
        let gl_format = translate_to_gl(format, &profile).unwrap();
        let back = translate_from_gl(
            gl_format.internal,
            gl_format.external,
            gl_format.base_internal,
            gl_format.ty,
        );
        assert_eq!(back, Some(format), "round trip failed for {format:?}");
    }
}

#[test]
fn default_overload_matches_modern_profile() {
    for format in PixelFormat::ALL {
        assert_eq!(
            translate_to_gl_default(format).unwrap(),
            translate_to_gl(format, &Profile::modern()).unwrap()
        );
    }
}

#[test]
fn srgb_formats_fall_back_to_linear_without_decode_support() {
    let no_srgb = Profile {
        caps: ProfileCaps::CHANNEL_SWIZZLE,
    };
    let translated = translate_to_gl(PixelFormat::Srgba8, &no_srgb).unwrap();
    let linear = translate_to_gl(PixelFormat::Rgba8, &no_srgb).unwrap();
    assert_eq!(translated, linear);
    assert_eq!(translated.internal, gl::GL_RGBA8);

    // With decode support the sRGB internal format is used directly.
    let modern = translate_to_gl(PixelFormat::Srgba8, &Profile::modern()).unwrap();
    assert_eq!(modern.internal, gl::GL_SRGB8_ALPHA8);
}

#[test]
fn narrow_formats_widen_without_swizzle_support() {
    let no_swizzle = Profile {
        caps: ProfileCaps::SRGB_DECODE,
    };
    for (narrow, wide) in [
        (PixelFormat::R8, PixelFormat::Rgba8),
        (PixelFormat::Rg8, PixelFormat::Rgba8),
        (PixelFormat::Rg16f, PixelFormat::Rgba16f),
        (PixelFormat::R32f, PixelFormat::Rgba32f),
    ] {
        let translated = translate_to_gl(narrow, &no_swizzle).unwrap();
        let expected = translate_to_gl(wide, &Profile::modern()).unwrap();
        assert_eq!(translated, expected, "{narrow:?} should widen to {wide:?}");
        assert_ne!(
            translated,
            translate_to_gl(narrow, &Profile::modern()).unwrap(),
            "{narrow:?} must use the narrow layout under a swizzle-capable profile"
        );
    }
}

#[test]
fn legacy_profile_applies_both_fallbacks() {
    let legacy = Profile::legacy();
    assert_eq!(
        translate_to_gl(PixelFormat::Srgb8, &legacy).unwrap().internal,
        gl::GL_RGB8
    );
    assert_eq!(
        translate_to_gl(PixelFormat::R16, &legacy).unwrap().internal,
        gl::GL_RGBA16
    );
}

#[test]
fn compressed_formats_ignore_profile_fallbacks() {
    for format in compressed_formats() {
        assert_eq!(
            translate_to_gl(format, &Profile::legacy()).unwrap(),
            translate_to_gl(format, &Profile::modern()).unwrap(),
            "{format:?}"
        );
    }
}

#[test]
fn type_sizes_match_packed_layout() {
    for format in uncompressed_formats() {
        let desc = pixel_desc(format).unwrap();
        let gl_format = translate_to_gl_default(format).unwrap();
        let element = type_size(gl_format.ty).unwrap();
        assert_eq!(
            u32::from(desc.packed_bytes),
            u32::from(desc.channels) * element,
            "{format:?}: packed bytes disagree with transfer type size"
        );
    }
}

#[test]
fn type_size_covers_the_scalar_table() {
    assert_eq!(type_size(gl::GL_UNSIGNED_BYTE).unwrap(), 1);
    assert_eq!(type_size(gl::GL_HALF_FLOAT).unwrap(), 2);
    assert_eq!(type_size(gl::GL_FLOAT).unwrap(), 4);
    assert!(matches!(
        type_size(0xDEAD).unwrap_err(),
        EmberError::UnknownTypeCode(0xDEAD)
    ));
}

#[test]
fn unknown_descriptor_has_no_inverse() {
    assert_eq!(translate_from_gl(0, 0, 0, 0), None);
}
