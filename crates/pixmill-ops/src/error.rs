//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
///
/// Every engine operation either stores a complete raster or returns one of
/// these; the registry is never left partially updated.
#[derive(Error, Debug)]
pub enum OpsError {
    /// A source image name is not present in the registry.
    #[error("unknown image: '{0}'")]
    UnknownImage(String),

    /// An unrecognized component, transform, filter or mode name.
    #[error("unknown {family}: '{value}'")]
    UnknownVariant {
        /// Which family of names was being parsed (e.g. "filter")
        family: &'static str,
        /// The rejected string
        value: String,
    },

    /// Operands of a multi-source operation differ in size.
    #[error("size mismatch: {0}")]
    SizeMismatch(pixmill_core::Error),

    /// Engine configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

impl OpsError {
    /// Creates an [`OpsError::UnknownVariant`].
    pub fn unknown_variant(family: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            family,
            value: value.into(),
        }
    }

    /// Returns `true` for a missing registry entry.
    pub fn is_unknown_image(&self) -> bool {
        matches!(self, Self::UnknownImage(_))
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
