//! Conversions between rasters and interleaved sample buffers.

use crate::IoResult;
use pixmill_core::{Raster, Rgb};

/// Rescales one channel from `[0, max]` to `[0, 255]`, rounding to nearest.
#[inline]
pub fn to_u8(v: u32, max: u32) -> u8 {
    if max == 255 {
        return v.min(255) as u8;
    }
    let max = max.max(1) as u64;
    ((v as u64 * 255 + max / 2) / max).min(255) as u8
}

/// Interleaved 8-bit RGB samples, rescaled when `max_value != 255`.
pub fn to_rgb8(img: &Raster) -> Vec<u8> {
    let max = img.max_value();
    img.pixels()
        .iter()
        .flat_map(|px| px.to_array().map(|c| to_u8(c, max)))
        .collect()
}

/// Builds a raster from interleaved samples with `channels` samples per
/// pixel. One or two channels are grey (plus alpha), three or four are RGB
/// (plus alpha). Alpha is dropped.
pub fn from_interleaved<T>(
    width: u32,
    height: u32,
    max_value: u32,
    channels: usize,
    samples: &[T],
) -> IoResult<Raster>
where
    T: Copy + Into<u32>,
{
    let pixels = samples
        .chunks_exact(channels)
        .map(|s| match channels {
            1 | 2 => Rgb::splat(s[0].into()),
            _ => Rgb::new(s[0].into(), s[1].into(), s[2].into()),
        })
        .collect();
    Ok(Raster::new(width, height, max_value, pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u8() {
        assert_eq!(to_u8(200, 255), 200);
        assert_eq!(to_u8(65535, 65535), 255);
        assert_eq!(to_u8(0, 65535), 0);
        assert_eq!(to_u8(1, 2), 128);
        assert_eq!(to_u8(15, 15), 255);
        assert_eq!(to_u8(7, 15), 119);
    }

    #[test]
    fn test_to_rgb8_rescales() {
        let img = Raster::from_fn(2, 1, 1, |x, _| Rgb::splat(x));
        assert_eq!(to_rgb8(&img), vec![0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_from_interleaved_layouts() {
        let grey = from_interleaved(2, 1, 255, 1, &[10u8, 20]).unwrap();
        assert_eq!(grey.pixel(1, 0), Rgb::splat(20));

        let ga = from_interleaved(1, 1, 255, 2, &[30u8, 0]).unwrap();
        assert_eq!(ga.pixel(0, 0), Rgb::splat(30));

        let rgba = from_interleaved(1, 1, 255, 4, &[1u8, 2, 3, 4]).unwrap();
        assert_eq!(rgba.pixel(0, 0), Rgb::new(1, 2, 3));

        let wide = from_interleaved(1, 1, 65535, 3, &[1000u16, 2000, 65535]).unwrap();
        assert_eq!(wide.pixel(0, 0), Rgb::new(1000, 2000, 65535));
    }

    #[test]
    fn test_from_interleaved_short_buffer() {
        assert!(from_interleaved(2, 2, 255, 3, &[0u8; 9]).is_err());
    }
}
