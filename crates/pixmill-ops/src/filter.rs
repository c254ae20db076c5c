//! Convolution filters.
//!
//! # Kernels
//!
//! - [`Kernel::blur`] - 3x3 center-weighted blur (weights sum to 1)
//! - [`Kernel::sharpen`] - 5x5 sharpen: -1/8 outer ring, 1/4 inner ring,
//!   center passes the source value through unscaled
//!
//! # Borders
//!
//! The source is read through a [`PaddedView`]: samples outside the raster
//! are black. Edges are neither clamped nor wrapped.
//!
//! # Accumulation
//!
//! Channels are accumulated as integers. The accumulator starts at
//! `trunc(center_weight * center)`, and after adding each remaining tap
//! (kernel rows top to bottom, left to right) it is truncated toward zero.
//! The final value is clamped to `[0, max_value]`. The tap order is part of
//! the observable output.
//!
//! # Example
//!
//! ```rust
//! use pixmill_core::{Raster, Rgb};
//! use pixmill_ops::filter::{convolve, Kernel};
//!
//! let src = Raster::from_fn(4, 4, 255, |_, _| Rgb::splat(128));
//! let blurred = convolve(&src, &Kernel::blur());
//! // Interior pixels of a flat image keep their value.
//! assert_eq!(blurred.pixel(1, 1), Rgb::splat(128));
//! ```

use crate::kinds::FilterKind;
use pixmill_core::{Raster, Rgb};
use tracing::{debug, trace};

/// Square convolution kernel with an odd side.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Row-major weights, `size * size` entries.
    data: Vec<f64>,
    /// Side length (odd).
    size: usize,
}

impl Kernel {
    /// 3x3 blur: center 1/4, edge neighbors 1/8, diagonals 1/16.
    ///
    /// ```rust
    /// use pixmill_ops::filter::Kernel;
    ///
    /// let k = Kernel::blur();
    /// assert_eq!(k.size(), 3);
    /// assert_eq!(k.weight(1, 1), 0.25);
    /// ```
    pub fn blur() -> Self {
        #[rustfmt::skip]
        let data = vec![
            0.0625, 0.125, 0.0625,
            0.125,  0.25,  0.125,
            0.0625, 0.125, 0.0625,
        ];
        Self { data, size: 3 }
    }

    /// 5x5 sharpen.
    ///
    /// ```rust
    /// use pixmill_ops::filter::Kernel;
    ///
    /// let k = Kernel::sharpen();
    /// assert_eq!(k.size(), 5);
    /// assert_eq!(k.weight(0, 0), -0.125);
    /// assert_eq!(k.weight(1, 2), 0.25);
    /// assert_eq!(k.weight(2, 2), 1.0);
    /// ```
    pub fn sharpen() -> Self {
        let size: usize = 5;
        let center = size / 2;
        let data = (0..size * size)
            .map(|i| {
                let ring = (i / size).abs_diff(center).max((i % size).abs_diff(center));
                match ring {
                    0 => 1.0,
                    1 => 0.25,
                    _ => -0.125,
                }
            })
            .collect();
        Self { data, size }
    }

    /// Kernel for a filter kind.
    pub fn for_kind(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Blur => Self::blur(),
            FilterKind::Sharpen => Self::sharpen(),
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half the side length; also the padding the kernel needs.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Weight at kernel row `ky`, column `kx`.
    #[inline]
    pub fn weight(&self, ky: usize, kx: usize) -> f64 {
        self.data[ky * self.size + kx]
    }
}

/// Zero-padded read-only view of a raster.
///
/// Any coordinate outside the raster reads as [`Rgb::BLACK`].
#[derive(Debug, Clone, Copy)]
pub struct PaddedView<'a> {
    src: &'a Raster,
}

impl<'a> PaddedView<'a> {
    /// Wraps `src`.
    pub fn new(src: &'a Raster) -> Self {
        Self { src }
    }

    /// Pixel at `(x, y)`, black outside the raster.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Rgb {
        self.src.get(x, y).unwrap_or(Rgb::BLACK)
    }
}

/// Convolves `src` with `kernel`.
pub fn convolve(src: &Raster, kernel: &Kernel) -> Raster {
    trace!(width = src.width(), height = src.height(), kernel = kernel.size(), "convolve");

    let view = PaddedView::new(src);
    let r = kernel.radius();
    let max = src.max_value() as f64;
    let center_w = kernel.weight(r, r);

    Raster::from_fn(src.width(), src.height(), src.max_value(), |x, y| {
        let center = view.get(x as i64, y as i64).to_array();
        let mut acc = center.map(|c| (center_w * c as f64).trunc());

        for ky in 0..kernel.size() {
            for kx in 0..kernel.size() {
                if ky == r && kx == r {
                    continue;
                }
                let w = kernel.weight(ky, kx);
                let sx = x as i64 + kx as i64 - r as i64;
                let sy = y as i64 + ky as i64 - r as i64;
                let px = view.get(sx, sy).to_array();
                for c in 0..3 {
                    acc[c] = (acc[c] + w * px[c] as f64).trunc();
                }
            }
        }

        let out = acc.map(|v| v.clamp(0.0, max) as u32);
        Rgb::from(out)
    })
}

/// Applies one of the fixed filters.
pub fn filter(src: &Raster, kind: FilterKind) -> Raster {
    debug!(filter = %kind, width = src.width(), height = src.height(), "Applying filter");
    convolve(src, &Kernel::for_kind(kind))
}
