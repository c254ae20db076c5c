//! Channel split and recombination.
//!
//! [`split`] turns one color raster into three greyscale rasters, one per
//! channel. [`combine`] reverses it, taking red from the first raster, green
//! from the second and blue from the third. `combine(split(x))` reproduces
//! `x`.

use crate::kinds::GreyscaleComponent;
use crate::point::greyscale;
use crate::{OpsError, OpsResult};
use pixmill_core::{Channel, Error, Raster, Rgb};

/// Splits `src` into `[red, green, blue]` greyscale rasters.
pub fn split(src: &Raster) -> [Raster; 3] {
    Channel::ALL.map(|c| greyscale(src, GreyscaleComponent::from(c)))
}

/// Builds a color raster from the red of `r`, the green of `g` and the blue
/// of `b`.
///
/// Output width, height and max value come from `r`. All three rasters
/// must have the same dimensions.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] when `g` or `b` differs in size from `r`.
pub fn combine(r: &Raster, g: &Raster, b: &Raster) -> OpsResult<Raster> {
    for other in [g, b] {
        if !r.same_shape(other) {
            return Err(OpsError::SizeMismatch(Error::dimension_mismatch(
                r.dimensions(),
                other.dimensions(),
            )));
        }
    }

    Ok(Raster::from_fn(r.width(), r.height(), r.max_value(), |x, y| {
        Rgb::new(r.pixel(x, y).r, g.pixel(x, y).g, b.pixel(x, y).b)
    }))
}
