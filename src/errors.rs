//! Error Types
//!
//! This module defines the error types used throughout the rendering core.
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, EmberError>`. Capability-validation rejections are
//! *not* errors; the resolver reports those as `Ok(None)` so callers can skip
//! the offending material and continue the scene build.

use thiserror::Error;

use crate::format::PixelFormat;

/// The main error type for the Ember rendering core.
#[derive(Error, Debug)]
pub enum EmberError {
    // ========================================================================
    // Capability & Variant Errors
    // ========================================================================
    /// A capability combination failed validation.
    ///
    /// The resolver itself signals this case through an empty result; this
    /// variant exists for callers that need to report the rejection upward.
    #[error("Invalid capability combination: {0}")]
    InvalidFlagCombination(&'static str),

    /// A generated shader program failed to build.
    #[error("Effect compilation failed for '{label}': {message}")]
    CompilationFailure {
        /// Label of the effect that was being compiled.
        label: String,
        /// Backend-reported failure description.
        message: String,
    },

    // ========================================================================
    // Format & Translation Errors
    // ========================================================================
    /// A pixel format was looked up in a table it does not belong to.
    #[error("Pixel format {format:?} is outside the {expected} range")]
    FormatOutOfRange {
        /// The offending format.
        format: PixelFormat,
        /// Which table range was expected ("uncompressed" or "compressed").
        expected: &'static str,
    },

    /// A scalar type code is not part of the translator's type table.
    #[error("Unknown scalar type code: {0:#06x}")]
    UnknownTypeCode(u32),
}

/// Alias for `Result<T, EmberError>`.
pub type Result<T> = std::result::Result<T, EmberError>;
