//! # pixmill-core
//!
//! Core types for the pixmill image-transformation engine.
//!
//! - [`Rgb`] and [`Channel`] - plain pixel values and channel selection
//! - [`value`], [`intensity`], [`luma`] - scalars derived from a pixel
//! - [`Raster`] - immutable row-major RGB grid with a shared max value
//! - [`Registry`] - session-scoped mapping from image names to rasters
//!
//! ## Crate Structure
//!
//! ```text
//! pixmill-core (this crate)
//!    ^
//!    |
//!    +-- pixmill-ops (operations, session engine)
//!    +-- pixmill-io  (PPM/PNG/JPEG/BMP codecs)
//!    +-- pixmill-cli (command interpreter)
//! ```
//!
//! The core never touches a file system or display surface; decoding and
//! encoding belong to `pixmill-io`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod raster;
pub mod registry;

pub use error::{Error, Result};
pub use pixel::{intensity, luma, value, Channel, Rgb, LUMA, LUMA_B, LUMA_G, LUMA_R};
pub use raster::{Raster, DEFAULT_MAX_VALUE};
pub use registry::{Registry, SharedRegistry};

/// Prelude module for convenient imports.
///
/// ```
/// use pixmill_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{intensity, luma, value, Channel, Rgb};
    pub use crate::raster::Raster;
    pub use crate::registry::Registry;
}
