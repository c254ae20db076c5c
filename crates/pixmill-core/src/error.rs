//! Error types for pixmill-core.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the raster model itself:
//! - Raster construction (dimensions, pixel count, channel range)
//! - Registry lookups that require a name to be present
//! - Shape checks between rasters
//!
//! # Usage
//!
//! ```rust
//! use pixmill_core::{Error, Result};
//!
//! fn check(name: &str, known: bool) -> Result<()> {
//!     if !known {
//!         return Err(Error::unknown_image(name));
//!     }
//!     Ok(())
//! }
//! assert!(check("koala", false).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the raster model and the registry.
///
/// # Categories
///
/// - **Lookup errors**: [`UnknownImage`](Error::UnknownImage)
/// - **Construction errors**: [`InvalidDimensions`](Error::InvalidDimensions),
///   [`PixelCountMismatch`](Error::PixelCountMismatch),
///   [`ChannelOutOfRange`](Error::ChannelOutOfRange)
/// - **Shape errors**: [`DimensionMismatch`](Error::DimensionMismatch)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A name was looked up in the registry and nothing is stored under it.
    #[error("unknown image: '{name}'")]
    UnknownImage {
        /// The missing name
        name: String,
    },

    /// Width or height is zero, or `width * height` overflows.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// The pixel buffer does not hold exactly `width * height` pixels.
    #[error("pixel count mismatch: expected {expected}, got {got}")]
    PixelCountMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the supplied buffer
        got: usize,
    },

    /// A channel value exceeds the raster's maximum value.
    #[error("channel value {value} at ({x}, {y}) exceeds max value {max_value}")]
    ChannelOutOfRange {
        /// Column of the offending pixel
        x: u32,
        /// Row of the offending pixel
        y: u32,
        /// Offending channel value
        value: u32,
        /// Raster maximum
        max_value: u32,
    },

    /// Two rasters that must share a shape do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First raster width
        a_width: u32,
        /// First raster height
        a_height: u32,
        /// Second raster width
        b_width: u32,
        /// Second raster height
        b_height: u32,
    },
}

impl Error {
    /// Creates an [`Error::UnknownImage`] error.
    #[inline]
    pub fn unknown_image(name: impl Into<String>) -> Self {
        Self::UnknownImage { name: name.into() }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Returns `true` if this is a registry lookup failure.
    #[inline]
    pub fn is_unknown_image(&self) -> bool {
        matches!(self, Self::UnknownImage { .. })
    }
}
