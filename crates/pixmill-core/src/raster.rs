//! The in-memory raster.
//!
//! A [`Raster`] is a row-major grid of [`Rgb`] pixels with a width, a height
//! and a single maximum channel value shared by all three channels.
//!
//! # Memory Layout
//!
//! ```text
//! index = y * width + x
//! [px(0,0) px(1,0) ... px(w-1,0)]  <- row 0
//! [px(0,1) px(1,1) ... px(w-1,1)]  <- row 1
//! ```
//!
//! # Immutability
//!
//! The pixel buffer lives behind an [`Arc`] and is never mutated after
//! construction. Cloning a raster shares the buffer; every operation builds a
//! new raster, typically with [`Raster::from_fn`], which writes each
//! destination pixel exactly once.
//!
//! ```rust
//! use pixmill_core::{Raster, Rgb};
//!
//! let img = Raster::from_fn(2, 2, 255, |x, y| Rgb::splat(x * 100 + y * 10));
//! assert_eq!(img.pixel(1, 1), Rgb::splat(110));
//!
//! let copy = img.clone(); // shares the buffer
//! assert_eq!(copy, img);
//! ```

use crate::{Error, Result, Rgb};
use std::sync::Arc;

/// Maximum channel value used by 8-bit formats.
pub const DEFAULT_MAX_VALUE: u32 = 255;

/// Immutable RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    max_value: u32,
    pixels: Arc<Vec<Rgb>>,
}

impl Raster {
    /// Creates a raster from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if either side is zero
    /// - [`Error::PixelCountMismatch`] if `pixels.len() != width * height`
    /// - [`Error::ChannelOutOfRange`] if any channel exceeds `max_value`
    pub fn new(width: u32, height: u32, max_value: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                got: pixels.len(),
            });
        }
        if let Some((i, px)) = pixels
            .iter()
            .enumerate()
            .find(|(_, px)| px.max_channel() > max_value)
        {
            return Err(Error::ChannelOutOfRange {
                x: (i % width as usize) as u32,
                y: (i / width as usize) as u32,
                value: px.max_channel(),
                max_value,
            });
        }
        Ok(Self {
            width,
            height,
            max_value,
            pixels: Arc::new(pixels),
        })
    }

    /// Creates a raster from a list of rows.
    ///
    /// All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Rgb>>, max_value: u32) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        if let Some(bad) = rows.iter().find(|r| r.len() as u32 != width) {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("ragged rows: found a row of length {}", bad.len()),
            ));
        }
        let pixels = rows.into_iter().flatten().collect();
        Self::new(width, height, max_value, pixels)
    }

    /// Builds a raster by evaluating `f(x, y)` once per pixel, row by row.
    ///
    /// Channels returned by `f` are clamped to `max_value`. Zero-sized
    /// requests produce an empty raster; callers only pass the shape of an
    /// existing raster, which is never empty.
    pub fn from_fn<F>(width: u32, height: u32, max_value: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y).clamped(max_value));
            }
        }
        Self {
            width,
            height,
            max_value,
            pixels: Arc::new(pixels),
        }
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Maximum channel value.
    #[inline]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Returns the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Returns the pixel at column `x`, row `y`, or `None` outside the raster.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Returns `true` if both rasters have the same width and height.
    #[inline]
    pub fn same_shape(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Builds a new raster of the same shape by mapping every pixel.
    pub fn map<F>(&self, mut f: F) -> Raster
    where
        F: FnMut(Rgb) -> Rgb,
    {
        let max = self.max_value;
        let pixels = self.pixels.iter().map(|&px| f(px).clamped(max)).collect();
        Raster {
            width: self.width,
            height: self.height,
            max_value: max,
            pixels: Arc::new(pixels),
        }
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(width, height, "zero-sized raster"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))
}
