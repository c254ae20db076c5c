//! RGB pixel value and the scalars derived from it.
//!
//! # Types
//!
//! - [`Rgb`] - plain three-channel value, `Copy`, no color space tagging
//! - [`Channel`] - selects one of the three channels
//!
//! # Derived scalars
//!
//! Greyscale variants collapse a pixel to a single number:
//!
//! | Function      | Definition                              |
//! |---------------|-----------------------------------------|
//! | [`value`]     | `max(R, G, B)`                          |
//! | [`intensity`] | `floor((R + G + B) / 3)`                |
//! | [`luma`]      | `round(0.2126R + 0.7152G + 0.0722B)`    |
//!
//! ```
//! use pixmill_core::pixel::{luma, value, intensity, Rgb};
//!
//! let px = Rgb::new(10, 20, 30);
//! assert_eq!(value(px), 30);
//! assert_eq!(intensity(px), 20);
//! assert_eq!(luma(px), 19);
//! ```

use std::fmt;

// ============================================================================
// Rec.709 Luma Constants
// ============================================================================

/// Rec.709 luma coefficient for the red channel.
pub const LUMA_R: f64 = 0.2126;

/// Rec.709 luma coefficient for the green channel.
pub const LUMA_G: f64 = 0.7152;

/// Rec.709 luma coefficient for the blue channel.
pub const LUMA_B: f64 = 0.0722;

/// Rec.709 luma coefficients as `[R, G, B]`.
pub const LUMA: [f64; 3] = [LUMA_R, LUMA_G, LUMA_B];

/// One of the three color channels of an [`Rgb`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// All channels in R, G, B order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// A single RGB pixel.
///
/// Channels are unsigned integers; the valid upper bound is the `max_value`
/// of the raster that holds the pixel, not a property of the pixel itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u32,
    /// Green channel
    pub g: u32,
    /// Blue channel
    pub b: u32,
}

impl Rgb {
    /// All channels zero.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Creates a pixel from its three channels.
    #[inline]
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }

    /// Creates a grey pixel with `R = G = B = v`.
    #[inline]
    pub const fn splat(v: u32) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Returns the value of one channel.
    #[inline]
    pub fn channel(self, channel: Channel) -> u32 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Returns the channels as `[R, G, B]`.
    #[inline]
    pub fn to_array(self) -> [u32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamps every channel to `max`.
    #[inline]
    pub fn clamped(self, max: u32) -> Self {
        Self {
            r: self.r.min(max),
            g: self.g.min(max),
            b: self.b.min(max),
        }
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(self) -> u32 {
        self.r.max(self.g).max(self.b)
    }
}

impl From<[u32; 3]> for Rgb {
    fn from(c: [u32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Clamps a signed intermediate result into `[0, max]`.
#[inline]
pub fn clamp_channel(v: i64, max: u32) -> u32 {
    v.clamp(0, max as i64) as u32
}

/// The *value* of a pixel: its largest channel.
#[inline]
pub fn value(px: Rgb) -> u32 {
    px.max_channel()
}

/// The *intensity* of a pixel: the floored mean of its channels.
#[inline]
pub fn intensity(px: Rgb) -> u32 {
    ((px.r as u64 + px.g as u64 + px.b as u64) / 3) as u32
}

/// The *luma* of a pixel using Rec.709 weights, rounded to nearest.
#[inline]
pub fn luma(px: Rgb) -> u32 {
    let y = LUMA_R * px.r as f64 + LUMA_G * px.g as f64 + LUMA_B * px.b as f64;
    y.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_luma_weights_sum_to_one() {
        let sum: f64 = LUMA.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_value() {
        assert_eq!(value(Rgb::new(3, 200, 17)), 200);
        assert_eq!(value(Rgb::BLACK), 0);
    }

    #[test]
    fn test_intensity_floors() {
        // (1 + 1 + 2) / 3 = 1.33
        assert_eq!(intensity(Rgb::new(1, 1, 2)), 1);
        assert_eq!(intensity(Rgb::new(255, 255, 255)), 255);
    }

    #[test]
    fn test_luma_rounds() {
        // 21.26 + 78.672 + 8.664 = 108.596
        assert_eq!(luma(Rgb::new(100, 110, 120)), 109);
        assert_eq!(luma(Rgb::splat(255)), 255);
        assert_eq!(luma(Rgb::BLACK), 0);
    }

    #[test]
    fn test_channel_access() {
        let px = Rgb::new(1, 2, 3);
        let got: Vec<u32> = Channel::ALL.iter().map(|&c| px.channel(c)).collect();
        assert_eq!(got, vec![1, 2, 3]);
        assert_eq!(px.to_array(), [1, 2, 3]);
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-5, 255), 0);
        assert_eq!(clamp_channel(300, 255), 255);
        assert_eq!(clamp_channel(42, 255), 42);
        assert_eq!(Rgb::new(10, 300, 0).clamped(255), Rgb::new(10, 255, 0));
    }
}
