//! Closed sets of operation variants.
//!
//! Each family that the command language names by string is an enum here.
//! Parsing happens once, at the adapter boundary, through [`FromStr`]; past
//! that point every `match` is exhaustive.
//!
//! ```rust
//! use pixmill_ops::kinds::{FilterKind, GreyscaleComponent};
//!
//! let c: GreyscaleComponent = "luma-component".parse().unwrap();
//! assert_eq!(c, GreyscaleComponent::Luma);
//! assert!("emboss".parse::<FilterKind>().is_err());
//! ```

use crate::{OpsError, OpsResult};
use pixmill_core::Channel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which scalar a single-channel greyscale image is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GreyscaleComponent {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
    /// `max(R, G, B)`
    Value,
    /// Rec.709 luma
    Luma,
    /// Mean of the channels
    Intensity,
}

impl GreyscaleComponent {
    /// All components.
    pub const ALL: [GreyscaleComponent; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Value,
        Self::Luma,
        Self::Intensity,
    ];

    /// The raw channel this component copies, if it is one.
    pub fn channel(self) -> Option<Channel> {
        match self {
            Self::Red => Some(Channel::Red),
            Self::Green => Some(Channel::Green),
            Self::Blue => Some(Channel::Blue),
            Self::Value | Self::Luma | Self::Intensity => None,
        }
    }

    fn stem(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Value => "value",
            Self::Luma => "luma",
            Self::Intensity => "intensity",
        }
    }
}

impl From<Channel> for GreyscaleComponent {
    fn from(c: Channel) -> Self {
        match c {
            Channel::Red => Self::Red,
            Channel::Green => Self::Green,
            Channel::Blue => Self::Blue,
        }
    }
}

impl fmt::Display for GreyscaleComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-component", self.stem())
    }
}

impl FromStr for GreyscaleComponent {
    type Err = OpsError;

    /// Accepts both `red` and `red-component` spellings.
    fn from_str(s: &str) -> OpsResult<Self> {
        let stem = s.strip_suffix("-component").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|c| c.stem() == stem)
            .ok_or_else(|| OpsError::unknown_variant("greyscale component", s))
    }
}

/// Fixed 3x3 color matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTransform {
    /// Warm brown tone
    Sepia,
    /// Luma weights on every output row
    Greyscale,
}

impl fmt::Display for ColorTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sepia => "sepia",
            Self::Greyscale => "greyscale",
        })
    }
}

impl FromStr for ColorTransform {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s {
            "sepia" => Ok(Self::Sepia),
            "greyscale" => Ok(Self::Greyscale),
            _ => Err(OpsError::unknown_variant("color transform", s)),
        }
    }
}

/// Convolution filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// 3x3 center-weighted blur
    Blur,
    /// 5x5 sharpen
    Sharpen,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blur => "blur",
            Self::Sharpen => "sharpen",
        })
    }
}

impl FromStr for FilterKind {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s {
            "blur" => Ok(Self::Blur),
            "sharpen" => Ok(Self::Sharpen),
            _ => Err(OpsError::unknown_variant("filter", s)),
        }
    }
}

/// How quantization error is carried to neighbors when dithering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherMode {
    /// Truncate each weight before scaling the error. All weights are below
    /// one, so nothing propagates and the output is a plain luma threshold.
    /// Matches the historical output of this tool.
    #[default]
    Legacy,
    /// Floyd-Steinberg: truncate `weight * error`.
    FloydSteinberg,
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Legacy => "legacy",
            Self::FloydSteinberg => "floyd-steinberg",
        })
    }
}

impl FromStr for DitherMode {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "floyd-steinberg" | "fs" => Ok(Self::FloydSteinberg),
            _ => Err(OpsError::unknown_variant("dither mode", s)),
        }
    }
}
