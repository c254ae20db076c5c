//! Linear color-matrix transforms.
//!
//! Each output channel is a dot product of one matrix row with the source
//! `(R, G, B)`, truncated toward zero and clamped to `[0, max_value]`.
//!
//! ```rust
//! use pixmill_core::{Raster, Rgb};
//! use pixmill_ops::color::{apply_matrix, SEPIA};
//!
//! let src = Raster::from_fn(1, 1, 255, |_, _| Rgb::new(10, 20, 30));
//! // 0.393*10 + 0.769*20 + 0.189*30 = 24.98 -> 24
//! assert_eq!(apply_matrix(&src, &SEPIA).pixel(0, 0).r, 24);
//! ```

use crate::kinds::ColorTransform;
use pixmill_core::{Raster, Rgb, LUMA};

/// Row-major 3x3 matrix applied to `(R, G, B)` column vectors.
pub type ColorMatrix = [[f64; 3]; 3];

/// Sepia tone.
pub const SEPIA: ColorMatrix = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Rec.709 luma on every output row.
pub const LUMA_GREYSCALE: ColorMatrix = [LUMA, LUMA, LUMA];

impl ColorTransform {
    /// The matrix this transform applies.
    pub fn matrix(self) -> &'static ColorMatrix {
        match self {
            ColorTransform::Sepia => &SEPIA,
            ColorTransform::Greyscale => &LUMA_GREYSCALE,
        }
    }
}

/// Applies `m` to every pixel.
pub fn apply_matrix(src: &Raster, m: &ColorMatrix) -> Raster {
    let max = src.max_value() as f64;
    src.map(|px| {
        let v = [px.r as f64, px.g as f64, px.b as f64];
        let row = |i: usize| {
            let dot = m[i][0] * v[0] + m[i][1] * v[1] + m[i][2] * v[2];
            dot.trunc().clamp(0.0, max) as u32
        };
        Rgb::new(row(0), row(1), row(2))
    })
}

/// Applies one of the fixed color transforms.
pub fn color_transform(src: &Raster, kind: ColorTransform) -> Raster {
    apply_matrix(src, kind.matrix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixture() -> Raster {
        Raster::from_fn(2, 3, 255, |x, y| {
            let base = (y * 2 + x) * 30 + 10;
            Rgb::new(base, base + 10, base + 20)
        })
    }

    #[test]
    fn test_sepia_fixture() {
        let dst = color_transform(&fixture(), ColorTransform::Sepia);
        assert_eq!(dst.pixel(0, 0).r, 24);
        assert_eq!(dst.pixel(1, 0).g, 58);
        assert_eq!(dst.pixel(0, 1).b, 73);
        assert_eq!(dst.pixel(1, 1).r, 146);
        assert_eq!(dst.pixel(0, 2).g, 166);
        assert_eq!(dst.pixel(1, 2).b, 157);
    }

    #[test]
    fn test_greyscale_matrix_fixture() {
        let dst = color_transform(&fixture(), ColorTransform::Greyscale);
        let got: Vec<u32> = dst.pixels().iter().map(|p| p.r).collect();
        assert_eq!(got, vec![18, 48, 78, 108, 138, 168]);
        assert!(dst.pixels().iter().all(|p| p.r == p.g && p.g == p.b));
    }

    #[test]
    fn test_greyscale_matrix_truncates() {
        // Luma helper rounds 18.596 up; the matrix truncates it down.
        let src = Raster::from_fn(1, 1, 255, |_, _| Rgb::new(10, 20, 30));
        assert_eq!(color_transform(&src, ColorTransform::Greyscale).pixel(0, 0).r, 18);
        assert_eq!(pixmill_core::luma(src.pixel(0, 0)), 19);
    }

    #[test]
    fn test_sepia_clamps_white() {
        let src = Raster::from_fn(1, 1, 255, |_, _| Rgb::splat(255));
        let px = color_transform(&src, ColorTransform::Sepia).pixel(0, 0);
        assert_eq!(px.r, 255);
        assert_eq!(px.g, 255);
        // 0.937 * 255 = 238.9
        assert_eq!(px.b, 238);
    }

    #[test]
    fn test_luma_rows_sum_to_one() {
        for row in LUMA_GREYSCALE {
            assert_relative_eq!(row.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        }
    }
}
