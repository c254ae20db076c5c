//! Black-and-white error-diffusion dithering.
//!
//! Works on the luma of the source. Pixels are visited in row-major order;
//! each one is snapped to black or white and the difference is pushed into
//! the not-yet-visited neighbors:
//!
//! ```text
//!            .    *   7/16
//!          3/16 5/16  1/16
//! ```
//!
//! How much of the error actually moves depends on [`DitherMode`].

use crate::kinds::DitherMode;
use pixmill_core::{luma, Raster, Rgb};
use tracing::trace;

/// Neighbor offsets `(dx, dy)` and their share of the error.
const DIFFUSION: [(i64, i64, f64); 4] = [
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Snaps `old` to `0` or `white`, whichever is nearer. A value exactly
/// halfway stays black.
#[inline]
fn quantize(old: i64, white: i64) -> i64 {
    if (old - white).abs() < old { white } else { 0 }
}

#[inline]
fn share(mode: DitherMode, fraction: f64, error: i64) -> i64 {
    match mode {
        DitherMode::Legacy => (fraction.trunc() * error as f64) as i64,
        DitherMode::FloydSteinberg => (fraction * error as f64).trunc() as i64,
    }
}

/// Dithers `src` to pure black and white.
///
/// White is the raster's `max_value` (255 for 8-bit images). Every output
/// pixel has `R = G = B`, each either `0` or `max_value`.
pub fn dither(src: &Raster, mode: DitherMode) -> Raster {
    let (w, h) = (src.width() as i64, src.height() as i64);
    let white = src.max_value() as i64;
    trace!(width = w, height = h, mode = %mode, "dither");

    let mut working: Vec<i64> = src.pixels().iter().map(|&px| luma(px) as i64).collect();
    let mut levels = vec![0u32; working.len()];

    for y in 0..h {
        for x in 0..w {
            let i = (y * w + x) as usize;
            let old = working[i];
            let new = quantize(old, white);
            levels[i] = new as u32;

            let error = old - new;
            for (dx, dy, fraction) in DIFFUSION {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || nx >= w || ny >= h {
                    continue;
                }
                working[(ny * w + nx) as usize] += share(mode, fraction, error);
            }
        }
    }

    let width = src.width() as usize;
    Raster::from_fn(src.width(), src.height(), src.max_value(), |x, y| {
        Rgb::splat(levels[y as usize * width + x as usize])
    })
}
