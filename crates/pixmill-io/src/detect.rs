//! Format detection utilities.
//!
//! Detects image formats from file extensions and magic bytes.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain-text PPM (`P3`).
    Ppm,
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// Windows bitmap.
    Bmp,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file path.
    ///
    /// First checks magic bytes, falls back to extension.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        if let Ok(format) = Self::from_magic_bytes(path) {
            if format != Format::Unknown {
                return Ok(format);
            }
        }

        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only (case-insensitive).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("ppm") => Format::Ppm,
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            Some("bmp") => Format::Bmp,
            _ => Format::Unknown,
        }
    }

    /// Detects format from the first bytes of a file.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 8];
        let bytes_read = file.read(&mut header)?;
        Ok(Self::from_bytes(&header[..bytes_read]))
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // PNG: 0x89 'P' 'N' 'G' CR LF SUB LF
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Format::Png;
        }

        // JPEG: SOI followed by a marker
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Format::Jpeg;
        }

        if bytes.starts_with(b"BM") && bytes.len() >= 6 {
            return Format::Bmp;
        }

        // Plain PPM: "P3" then whitespace
        if bytes.len() >= 3 && bytes.starts_with(b"P3") && bytes[2].is_ascii_whitespace() {
            return Format::Ppm;
        }

        Format::Unknown
    }

    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Ppm => "ppm",
            Format::Png => "png",
            Format::Jpeg => "jpg",
            Format::Bmp => "bmp",
            Format::Unknown => "",
        }
    }

    /// Returns `true` if this format stores 8 bits per channel at most.
    pub fn is_8bit(&self) -> bool {
        matches!(self, Format::Png | Format::Jpeg | Format::Bmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(Format::from_extension("koala.ppm"), Format::Ppm);
        assert_eq!(Format::from_extension("koala.PPM"), Format::Ppm);
        assert_eq!(Format::from_extension("koala.png"), Format::Png);
        assert_eq!(Format::from_extension("koala.jpg"), Format::Jpeg);
        assert_eq!(Format::from_extension("koala.jpeg"), Format::Jpeg);
        assert_eq!(Format::from_extension("koala.bmp"), Format::Bmp);
        assert_eq!(Format::from_extension("koala.gif"), Format::Unknown);
        assert_eq!(Format::from_extension("koala"), Format::Unknown);
    }

    #[test]
    fn test_magic_bytes() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(Format::from_bytes(&png), Format::Png);

        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(Format::from_bytes(&jpeg), Format::Jpeg);

        let bmp = [b'B', b'M', 0x36, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(Format::from_bytes(&bmp), Format::Bmp);

        assert_eq!(Format::from_bytes(b"P3\n2 3\n"), Format::Ppm);
        assert_eq!(Format::from_bytes(b"P6\n2 3\n"), Format::Unknown);
        assert_eq!(Format::from_bytes(b"P3"), Format::Unknown);
        assert_eq!(Format::from_bytes(&[]), Format::Unknown);
    }

    #[test]
    fn test_detect_prefers_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mislabeled.png");
        std::fs::write(&path, b"P3\n1 1\n255\n0 0 0\n").unwrap();
        assert_eq!(Format::detect(&path).unwrap(), Format::Ppm);
    }

    #[test]
    fn test_detect_missing_falls_back_to_extension() {
        assert_eq!(Format::detect("/nonexistent/out.jpg").unwrap(), Format::Jpeg);
    }
}
