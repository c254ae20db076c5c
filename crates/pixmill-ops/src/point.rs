//! Point operations: each output pixel depends only on the input pixel at
//! the same position.

use crate::kinds::GreyscaleComponent;
use pixmill_core::pixel::clamp_channel;
use pixmill_core::{intensity, luma, value, Raster, Rgb};

/// Adds `delta` to every channel, clamping to `[0, max_value]`.
///
/// Negative deltas darken. Channels are clamped independently.
///
/// ```rust
/// use pixmill_core::{Raster, Rgb};
/// use pixmill_ops::point::brighten;
///
/// let src = Raster::from_fn(1, 1, 255, |_, _| Rgb::new(10, 128, 250));
/// assert_eq!(brighten(&src, 10).pixel(0, 0), Rgb::new(20, 138, 255));
/// assert_eq!(brighten(&src, -20).pixel(0, 0), Rgb::new(0, 108, 230));
/// ```
pub fn brighten(src: &Raster, delta: i32) -> Raster {
    let max = src.max_value();
    let shift = |c: u32| clamp_channel(c as i64 + delta as i64, max);
    src.map(|px| Rgb::new(shift(px.r), shift(px.g), shift(px.b)))
}

/// Collapses every pixel to one scalar and writes it to all three channels.
pub fn greyscale(src: &Raster, component: GreyscaleComponent) -> Raster {
    let scalar: fn(Rgb) -> u32 = match component {
        GreyscaleComponent::Red => |px| px.r,
        GreyscaleComponent::Green => |px| px.g,
        GreyscaleComponent::Blue => |px| px.b,
        GreyscaleComponent::Value => value,
        GreyscaleComponent::Luma => luma,
        GreyscaleComponent::Intensity => intensity,
    };
    src.map(|px| Rgb::splat(scalar(px)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Raster {
        Raster::new(
            3,
            1,
            255,
            vec![Rgb::new(0, 128, 255), Rgb::new(10, 20, 30), Rgb::new(200, 5, 99)],
        )
        .unwrap()
    }

    #[test]
    fn test_brighten_clamps_high() {
        let dst = brighten(&sample(), 100);
        assert_eq!(dst.pixel(0, 0), Rgb::new(100, 228, 255));
        assert_eq!(dst.pixel(2, 0), Rgb::new(255, 105, 199));
    }

    #[test]
    fn test_brighten_clamps_low() {
        let dst = brighten(&sample(), -50);
        assert_eq!(dst.pixel(0, 0), Rgb::new(0, 78, 205));
        assert_eq!(dst.pixel(1, 0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_brighten_respects_max_value() {
        let src = Raster::from_fn(1, 1, 15, |_, _| Rgb::new(10, 12, 14));
        assert_eq!(brighten(&src, 3).pixel(0, 0), Rgb::new(13, 15, 15));
    }

    #[test]
    fn test_brighten_monotonic() {
        let src = sample();
        for d in [0, 1, 17, 255, 1000] {
            let dst = brighten(&src, d);
            for (a, b) in src.pixels().iter().zip(dst.pixels()) {
                assert!(b.r >= a.r && b.g >= a.g && b.b >= a.b);
                assert!(b.max_channel() <= 255);
            }
        }
    }

    #[test]
    fn test_brighten_extreme_deltas() {
        let src = sample();
        assert!(brighten(&src, i32::MAX).pixels().iter().all(|&p| p == Rgb::splat(255)));
        assert!(brighten(&src, i32::MIN).pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_greyscale_channels() {
        let src = sample();
        assert_eq!(greyscale(&src, GreyscaleComponent::Red).pixel(2, 0), Rgb::splat(200));
        assert_eq!(greyscale(&src, GreyscaleComponent::Green).pixel(2, 0), Rgb::splat(5));
        assert_eq!(greyscale(&src, GreyscaleComponent::Blue).pixel(2, 0), Rgb::splat(99));
    }

    #[test]
    fn test_greyscale_derived() {
        let src = sample();
        assert_eq!(greyscale(&src, GreyscaleComponent::Value).pixel(1, 0), Rgb::splat(30));
        assert_eq!(greyscale(&src, GreyscaleComponent::Intensity).pixel(1, 0), Rgb::splat(20));
        // 2.126 + 14.304 + 2.166 = 18.596
        assert_eq!(greyscale(&src, GreyscaleComponent::Luma).pixel(1, 0), Rgb::splat(19));
    }

    #[test]
    fn test_greyscale_luma_property() {
        let src = Raster::from_fn(16, 16, 255, |x, y| Rgb::new(x * 15, y * 15, (x * y) % 256));
        let dst = greyscale(&src, GreyscaleComponent::Luma);
        for (s, d) in src.pixels().iter().zip(dst.pixels()) {
            assert_eq!(d.r, d.g);
            assert_eq!(d.g, d.b);
            assert_eq!(d.r, luma(*s));
        }
    }
}
