//! BMP format support via the `image` crate.

use crate::convert::{from_interleaved, to_rgb8};
use crate::{IoError, IoResult};
use image::{ImageFormat, ImageReader};
use pixmill_core::Raster;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reads a BMP file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let img = ImageReader::with_format(BufReader::new(file), ImageFormat::Bmp)
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?
        .to_rgb8();

    let raster = from_interleaved(img.width(), img.height(), 255, 3, img.as_raw().as_slice())?;
    debug!(path = %path.display(), width = raster.width(), height = raster.height(), "Read BMP");
    Ok(raster)
}

/// Writes a raster to a 24-bit BMP file.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    let rgb = image::RgbImage::from_raw(image.width(), image.height(), to_rgb8(image))
        .ok_or_else(|| IoError::EncodeError("buffer does not match dimensions".into()))?;
    rgb.save_with_format(path.as_ref(), ImageFormat::Bmp)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(())
}
