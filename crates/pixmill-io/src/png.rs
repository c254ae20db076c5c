//! PNG format support.
//!
//! # Features
//!
//! - 8-bit and 16-bit input, RGB, RGBA, grey and grey+alpha
//! - Palette and sub-byte grey input are expanded to 8-bit on decode
//! - Alpha is dropped
//! - 16-bit input loads with `max_value = 65535`
//! - Output is always 8-bit RGB
//!
//! # Example
//!
//! ```rust,ignore
//! use pixmill_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::convert::{from_interleaved, to_rgb8};
use crate::{IoError, IoResult};
use pixmill_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                other, info.bit_depth
            )));
        }
    };

    let img = match info.bit_depth {
        png::BitDepth::Eight => from_interleaved(info.width, info.height, 255, channels, data)?,
        png::BitDepth::Sixteen => {
            let wide = bytes_to_u16(data);
            from_interleaved(info.width, info.height, 65535, channels, wide.as_slice())?
        }
        other => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                info.color_type, other
            )));
        }
    };

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        max = img.max_value(),
        "Read PNG"
    );
    Ok(img)
}

/// Writes a raster to an 8-bit RGB PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(&to_rgb8(image))
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmill_core::Rgb;

    fn write_raw(
        path: &Path,
        w: u32,
        h: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        data: &[u8],
    ) {
        let file = File::create(path).unwrap();
        let mut enc = png::Encoder::new(BufWriter::new(file), w, h);
        enc.set_color(color);
        enc.set_depth(depth);
        let mut wr = enc.write_header().unwrap();
        wr.write_image_data(data).unwrap();
        wr.finish().unwrap();
    }

    #[test]
    fn test_roundtrip_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        let img = Raster::from_fn(32, 16, 255, |x, y| Rgb::new(x * 8, y * 16, 128));

        write(&path, &img).unwrap();
        let loaded = read(&path).unwrap();

        assert_eq!(loaded, img);
    }

    #[test]
    fn test_write_rescales() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("low.png");
        let img = Raster::from_fn(2, 1, 15, |x, _| Rgb::splat(x * 15));

        write(&path, &img).unwrap();
        let loaded = read(&path).unwrap();

        assert_eq!(loaded.max_value(), 255);
        assert_eq!(loaded.pixel(0, 0), Rgb::BLACK);
        assert_eq!(loaded.pixel(1, 0), Rgb::splat(255));
    }

    #[test]
    fn test_read_grey_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ga.png");
        let data = [40, 255, 200, 0];
        write_raw(&path, 2, 1, png::ColorType::GrayscaleAlpha, png::BitDepth::Eight, &data);

        let img = read(&path).unwrap();
        assert_eq!(img.pixel(0, 0), Rgb::splat(40));
        assert_eq!(img.pixel(1, 0), Rgb::splat(200));
    }

    #[test]
    fn test_read_16bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.png");
        let data = [0x12, 0x34, 0xFF, 0xFF, 0x00, 0x01];
        write_raw(&path, 1, 1, png::ColorType::Rgb, png::BitDepth::Sixteen, &data);

        let img = read(&path).unwrap();
        assert_eq!(img.max_value(), 65535);
        assert_eq!(img.pixel(0, 0), Rgb::new(0x1234, 0xFFFF, 1));
    }

    #[test]
    fn test_read_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not a png at all").unwrap();
        assert!(matches!(read(&path), Err(IoError::DecodeError(_))));
    }
}
