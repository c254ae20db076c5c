//! JPEG format support.
//!
//! Decoding via `jpeg-decoder` (RGB, grey, 16-bit grey and CMYK inputs),
//! encoding via `jpeg-encoder` as 8-bit RGB at [`QUALITY`].
//!
//! JPEG is lossy: a written raster reads back close to, not equal to, the
//! original.

use crate::convert::{from_interleaved, to_rgb8};
use crate::{IoError, IoResult};
use pixmill_core::Raster;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Encoder quality (1-100).
pub const QUALITY: u8 = 90;

/// Reads a JPEG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let img = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => {
            from_interleaved(width, height, 255, 3, pixels.as_slice())?
        }
        jpeg_decoder::PixelFormat::L8 => {
            from_interleaved(width, height, 255, 1, pixels.as_slice())?
        }
        jpeg_decoder::PixelFormat::L16 => {
            // High byte only.
            let grey: Vec<u8> = pixels.chunks_exact(2).map(|l16| l16[0]).collect();
            from_interleaved(width, height, 255, 1, grey.as_slice())?
        }
        jpeg_decoder::PixelFormat::CMYK32 => {
            let rgb: Vec<u8> = pixels
                .chunks_exact(4)
                .flat_map(|cmyk| {
                    let k = 1.0 - cmyk[3] as f32 / 255.0;
                    [0, 1, 2].map(|i| ((1.0 - cmyk[i] as f32 / 255.0) * k * 255.0) as u8)
                })
                .collect();
            from_interleaved(width, height, 255, 3, rgb.as_slice())?
        }
    };

    debug!(path = %path.display(), width, height, "Read JPEG");
    Ok(img)
}

/// Writes a raster to a JPEG file.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    use jpeg_encoder::{ColorType, Encoder};

    let (w, h) = image.dimensions();
    let (Ok(w16), Ok(h16)) = (u16::try_from(w), u16::try_from(h)) else {
        return Err(IoError::EncodeError(format!(
            "{w}x{h} exceeds the JPEG size limit of 65535"
        )));
    };

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, QUALITY);
    encoder
        .encode(&to_rgb8(image), w16, h16, ColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    std::fs::write(path.as_ref(), buffer)?;
    Ok(())
}
