//! Plain-text PPM (`P3`) support.
//!
//! # Layout
//!
//! ```text
//! P3
//! # comment lines start with '#'
//! <width> <height>
//! <max value>
//! r g b r g b ...        (row-major, any whitespace)
//! ```
//!
//! Written files put the header on three lines and every channel value on
//! its own line. The max value is kept as-is in both directions.
//!
//! # Example
//!
//! ```rust
//! use pixmill_io::ppm;
//!
//! let img = ppm::parse("P3\n1 1\n255\n10 20 30\n").unwrap();
//! assert_eq!(img.pixel(0, 0).to_array(), [10, 20, 30]);
//! assert!(ppm::encode(&img).starts_with("P3\n1 1\n255\n"));
//! ```

use crate::{IoError, IoResult};
use pixmill_core::{Raster, Rgb};
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

/// Reads a PPM file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let img = parse(&text)?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Read PPM");
    Ok(img)
}

/// Writes a raster to a PPM file.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    std::fs::write(path.as_ref(), encode(image))?;
    Ok(())
}

/// Parses PPM text.
///
/// # Errors
///
/// [`IoError::Parse`] for a wrong magic, a missing or non-numeric token, or
/// truncated pixel data. [`IoError::Raster`] if a channel exceeds the
/// declared max value.
pub fn parse(text: &str) -> IoResult<Raster> {
    let mut tokens = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace);

    match tokens.next() {
        Some("P3") => {}
        Some(other) => {
            return Err(IoError::parse(format!(
                "plain PPM must begin with P3, found '{other}'"
            )));
        }
        None => return Err(IoError::parse("empty file")),
    }

    let mut next = |what: &str| -> IoResult<u32> {
        let tok = tokens
            .next()
            .ok_or_else(|| IoError::parse(format!("unexpected end of data reading {what}")))?;
        tok.parse::<u32>()
            .map_err(|_| IoError::parse(format!("invalid {what}: '{tok}'")))
    };

    let width = next("width")?;
    let height = next("height")?;
    let max_value = next("max value")?;

    // The header is untrusted; pixels are only buffered as samples arrive.
    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| IoError::parse(format!("image too large: {width}x{height}")))?;
    let mut pixels = Vec::new();
    for _ in 0..count {
        let r = next("red sample")?;
        let g = next("green sample")?;
        let b = next("blue sample")?;
        pixels.push(Rgb::new(r, g, b));
    }

    Ok(Raster::new(width, height, max_value, pixels)?)
}

/// Encodes a raster as PPM text.
pub fn encode(image: &Raster) -> String {
    let mut out = String::with_capacity(16 + image.pixels().len() * 12);
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "P3\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.max_value()
    );
    for px in image.pixels() {
        let _ = write!(out, "{}\n{}\n{}\n", px.r, px.g, px.b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "P3
# 2 wide, 3 high
2 3
255
10 20 30  40 50 60
70 80 90  100 110 120
130 140 150  160 170 180
";

    #[test]
    fn test_parse_fixture() {
        let img = parse(FIXTURE).unwrap();
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(img.max_value(), 255);
        assert_eq!(img.pixel(1, 0), Rgb::new(40, 50, 60));
        assert_eq!(img.pixel(0, 2), Rgb::new(130, 140, 150));
    }

    #[test]
    fn test_comments_anywhere() {
        let img = parse("# leading\nP3\n1 1\n# mid\n15\n1 2 3\n# trailing\n").unwrap();
        assert_eq!(img.max_value(), 15);
        assert_eq!(img.pixel(0, 0), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_encode_layout() {
        let img = Raster::from_fn(1, 2, 100, |_, y| Rgb::new(y, 7, 99));
        assert_eq!(encode(&img), "P3\n1 2\n100\n0\n7\n99\n1\n7\n99\n");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(IoError::Parse(_))));
        assert!(matches!(parse("P6\n1 1\n255\n"), Err(IoError::Parse(_))));
        assert!(matches!(parse("P3\n1 x\n255\n"), Err(IoError::Parse(_))));
        assert!(matches!(parse("P3\n2 1\n255\n1 2 3 4 5\n"), Err(IoError::Parse(_))));
        assert!(matches!(parse("P3\n1 1\n255\n1 -2 3\n"), Err(IoError::Parse(_))));
    }

    #[test]
    fn test_oversized_header_is_parse_error() {
        let huge = parse("P3\n4294967295 4294967295\n255\n1 2 3\n");
        assert!(matches!(huge, Err(IoError::Parse(_))));

        let large = parse("P3\n100000 100000\n255\n1 2 3\n");
        match large {
            Err(IoError::Parse(msg)) => assert!(msg.contains("unexpected end of data"), "{msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_above_max() {
        assert!(matches!(parse("P3\n1 1\n10\n1 2 30\n"), Err(IoError::Raster(_))));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.ppm");
        let img = parse(FIXTURE).unwrap();
        write(&path, &img).unwrap();
        assert_eq!(read(&path).unwrap(), img);
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(read("/nonexistent/koala.ppm"), Err(IoError::Io(_))));
    }
}
