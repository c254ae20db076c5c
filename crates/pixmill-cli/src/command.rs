//! Command language.
//!
//! One command per line, tokens separated by whitespace:
//!
//! ```text
//! load images/koala.ppm koala
//! brighten 10 koala koala-bright
//! greyscale value-component koala koala-v
//! rgb-split koala koala-r koala-g koala-b
//! save out/koala-bright.png koala-bright
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Keywords are
//! case-sensitive, except that the argument-taking forms `brighten`,
//! `greyscale <component>`, `rgb-split` and `rgb-combine` match in any case.

use anyhow::{bail, Context, Result};
use pixmill_ops::{ColorTransform, FilterKind, GreyscaleComponent};
use std::fmt;
use std::path::PathBuf;

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `load <path> <name>`
    Load {
        /// File to decode
        path: PathBuf,
        /// Registry name
        name: String,
    },
    /// `save <path> <name>`
    Save {
        /// File to encode into
        path: PathBuf,
        /// Registry name
        name: String,
    },
    /// `horizontal-flip <src> <dst>`
    HorizontalFlip {
        /// Source name
        src: String,
        /// Destination name
        dst: String,
    },
    /// `vertical-flip <src> <dst>`
    VerticalFlip {
        /// Source name
        src: String,
        /// Destination name
        dst: String,
    },
    /// `brighten <delta> <src> <dst>`
    Brighten {
        /// Signed channel increment
        delta: i32,
        /// Source name
        src: String,
        /// Destination name
        dst: String,
    },
    /// `greyscale [<component>] <src> <dst>`, luma when omitted
    Greyscale {
        /// Scalar to keep
        component: GreyscaleComponent,
        /// Source name
        src: String,
        /// Destination name
        dst: String,
    },
    /// `sepia <src> <dst>`
    ColorTransform {
        /// Matrix to apply
        kind: ColorTransform,
        /// Source name
        src: String,
        /// Destination name
        dst: String,
    },
    /// `blur <src> <dst>` or `sharpen <src> <dst>`
    Filter {
        /// Kernel to apply
        kind: FilterKind,
        /// Source name
        src: String,
        /// Destination name
        dst: String,
    },
    /// `dither <src> <dst>`
    Dither {
        /// Source name
        src: String,
        /// Destination name
        dst: String,
    },
    /// `rgb-split <src> <r> <g> <b>`
    RgbSplit {
        /// Source name
        src: String,
        /// Red plane name
        r: String,
        /// Green plane name
        g: String,
        /// Blue plane name
        b: String,
    },
    /// `rgb-combine <dst> <r> <g> <b>`
    RgbCombine {
        /// Destination name
        dst: String,
        /// Red plane name
        r: String,
        /// Green plane name
        g: String,
        /// Blue plane name
        b: String,
    },
    /// `run <script>`
    Run {
        /// Script file
        path: PathBuf,
    },
}

impl Command {
    /// Parses one line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// ```rust
    /// use pixmill_cli::Command;
    /// use pixmill_ops::GreyscaleComponent;
    ///
    /// let cmd = Command::parse("greyscale koala grey").unwrap().unwrap();
    /// assert!(matches!(cmd, Command::Greyscale { component: GreyscaleComponent::Luma, .. }));
    /// assert!(Command::parse("# note").unwrap().is_none());
    /// assert!(Command::parse("emboss a b").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let own = |i: usize| tokens[i].to_string();
        let keyword = match tokens.len() {
            4 | 5 => tokens[0].to_ascii_lowercase(),
            _ => tokens[0].to_string(),
        };

        let cmd = match (keyword.as_str(), tokens.len()) {
            ("load", 3) => Self::Load { path: PathBuf::from(tokens[1]), name: own(2) },
            ("save", 3) => Self::Save { path: PathBuf::from(tokens[1]), name: own(2) },
            ("horizontal-flip", 3) => Self::HorizontalFlip { src: own(1), dst: own(2) },
            ("vertical-flip", 3) => Self::VerticalFlip { src: own(1), dst: own(2) },
            ("greyscale", 3) => Self::Greyscale {
                component: GreyscaleComponent::Luma,
                src: own(1),
                dst: own(2),
            },
            ("greyscale", 4) => Self::Greyscale {
                component: tokens[1].parse()?,
                src: own(2),
                dst: own(3),
            },
            ("sepia", 3) => Self::ColorTransform {
                kind: ColorTransform::Sepia,
                src: own(1),
                dst: own(2),
            },
            (kw @ ("blur" | "sharpen"), 3) => Self::Filter {
                kind: kw.parse()?,
                src: own(1),
                dst: own(2),
            },
            ("dither", 3) => Self::Dither { src: own(1), dst: own(2) },
            ("brighten", 4) => Self::Brighten {
                delta: tokens[1]
                    .parse()
                    .with_context(|| format!("invalid increment '{}'", tokens[1]))?,
                src: own(2),
                dst: own(3),
            },
            ("rgb-split", 5) => Self::RgbSplit { src: own(1), r: own(2), g: own(3), b: own(4) },
            ("rgb-combine", 5) => Self::RgbCombine { dst: own(1), r: own(2), g: own(3), b: own(4) },
            ("run", 2) => Self::Run { path: PathBuf::from(tokens[1]) },
            (kw, n) if is_keyword(kw) => {
                bail!("wrong number of arguments for '{kw}': {}", n - 1)
            }
            (kw, _) => bail!("unknown command '{kw}'"),
        };
        Ok(Some(cmd))
    }

    /// Keyword that starts this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Load { .. } => "load",
            Self::Save { .. } => "save",
            Self::HorizontalFlip { .. } => "horizontal-flip",
            Self::VerticalFlip { .. } => "vertical-flip",
            Self::Brighten { .. } => "brighten",
            Self::Greyscale { .. } => "greyscale",
            Self::ColorTransform { .. } => "sepia",
            Self::Filter { kind: FilterKind::Blur, .. } => "blur",
            Self::Filter { kind: FilterKind::Sharpen, .. } => "sharpen",
            Self::Dither { .. } => "dither",
            Self::RgbSplit { .. } => "rgb-split",
            Self::RgbCombine { .. } => "rgb-combine",
            Self::Run { .. } => "run",
        }
    }
}

const KEYWORDS: [&str; 13] = [
    "load",
    "save",
    "horizontal-flip",
    "vertical-flip",
    "brighten",
    "greyscale",
    "sepia",
    "blur",
    "sharpen",
    "dither",
    "rgb-split",
    "rgb-combine",
    "run",
];

fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = self.keyword();
        match self {
            Self::Load { path, name } | Self::Save { path, name } => {
                write!(f, "{kw} {} {name}", path.display())
            }
            Self::HorizontalFlip { src, dst }
            | Self::VerticalFlip { src, dst }
            | Self::ColorTransform { src, dst, .. }
            | Self::Filter { src, dst, .. }
            | Self::Dither { src, dst } => write!(f, "{kw} {src} {dst}"),
            Self::Brighten { delta, src, dst } => write!(f, "{kw} {delta} {src} {dst}"),
            Self::Greyscale { component, src, dst } => write!(f, "{kw} {component} {src} {dst}"),
            Self::RgbSplit { src, r, g, b } => write!(f, "{kw} {src} {r} {g} {b}"),
            Self::RgbCombine { dst, r, g, b } => write!(f, "{kw} {dst} {r} {g} {b}"),
            Self::Run { path } => write!(f, "{kw} {}", path.display()),
        }
    }
}
