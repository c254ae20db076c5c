//! Geometric transformation operations.
//!
//! # Operations
//!
//! - [`flip_h`] - Horizontal flip (mirror)
//! - [`flip_v`] - Vertical flip
//!
//! Both keep width, height and max value, and both are involutions:
//! flipping twice returns the original raster.
//!
//! # Example
//!
//! ```rust
//! use pixmill_core::{Raster, Rgb};
//! use pixmill_ops::transform::flip_h;
//!
//! let src = Raster::from_fn(2, 1, 255, |x, _| Rgb::splat(x * 100));
//! let flipped = flip_h(&src);
//! assert_eq!(flipped.pixel(0, 0), Rgb::splat(100)); // Was right, now left
//! ```

use pixmill_core::Raster;

/// Flips a raster horizontally (left-right mirror).
///
/// Destination column `x` is source column `width - 1 - x`.
pub fn flip_h(src: &Raster) -> Raster {
    let w = src.width();
    Raster::from_fn(w, src.height(), src.max_value(), |x, y| src.pixel(w - 1 - x, y))
}

/// Flips a raster vertically (top-bottom mirror).
///
/// Destination row `y` is source row `height - 1 - y`.
pub fn flip_v(src: &Raster) -> Raster {
    let h = src.height();
    Raster::from_fn(src.width(), h, src.max_value(), |x, y| src.pixel(x, h - 1 - y))
}
