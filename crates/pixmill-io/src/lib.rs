//! # pixmill-io
//!
//! File codecs for pixmill rasters.
//!
//! The engine in `pixmill-ops` never touches the file system; this crate
//! turns files into [`Raster`]s and back.
//!
//! - [`read`] / [`write`] - format auto-detection
//! - [`Format`] - detection from magic bytes and extensions
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pixmill_io::{read, write};
//!
//! let image = read("koala.ppm")?;
//! write("koala.png", &image)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths | Notes |
//! |--------|------|-------|------------|-------|
//! | PPM (P3) | Yes | Yes | any max value | Text, `#` comment lines |
//! | PNG | Yes | Yes | 8, 16 in / 8 out | Alpha dropped |
//! | JPEG | Yes | Yes | 8 | Quality 90 |
//! | BMP | Yes | Yes | 8 | Via `image` |
//!
//! Rasters whose max value is not 255 are rescaled when written to an 8-bit
//! format.
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)
//! - `bmp` - BMP support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
pub mod convert;
pub mod ppm;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

#[cfg(feature = "bmp")]
pub mod bmp;

pub use detect::Format;
pub use error::{IoError, IoResult};

use pixmill_core::Raster;
use std::path::Path;
use tracing::trace;

/// Reads an image file, detecting format from content then extension.
///
/// # Example
///
/// ```rust,ignore
/// let image = pixmill_io::read("input.png")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    trace!(path = %path.display(), ?format, "read");

    match format {
        Format::Ppm => ppm::read(path),

        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        #[cfg(feature = "bmp")]
        Format::Bmp => bmp::read(path),

        _ => Err(unsupported(path)),
    }
}

/// Writes a raster to a file, choosing the format from the extension.
///
/// # Example
///
/// ```rust,ignore
/// let image = pixmill_io::read("input.ppm")?;
/// pixmill_io::write("output.png", &image)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    trace!(path = %path.display(), ?format, "write");

    match format {
        Format::Ppm => ppm::write(path, image),

        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, image),

        #[cfg(feature = "bmp")]
        Format::Bmp => bmp::write(path, image),

        _ => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}
