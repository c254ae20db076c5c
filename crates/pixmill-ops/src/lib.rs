//! # pixmill-ops
//!
//! Image transformation operations and the session engine.
//!
//! Every operation exists twice: as a free function over [`Raster`]s
//! (no registry, no names) and as an [`Engine`] method that reads its
//! sources from the session registry and stores the result by name.
//!
//! # Modules
//!
//! - [`transform`] - Horizontal and vertical flips
//! - [`point`] - Brighten and component greyscale
//! - [`color`] - Fixed 3x3 color matrices (sepia, luma greyscale)
//! - [`filter`] - Blur and sharpen convolution
//! - [`dither`] - Black-and-white error diffusion
//! - [`channels`] - RGB split and combine
//! - [`engine`] - Named-image session
//! - [`config`] - YAML engine configuration
//!
//! # Example
//!
//! ```rust
//! use pixmill_core::{Raster, Rgb};
//! use pixmill_ops::{ColorTransform, Engine, GreyscaleComponent};
//!
//! let mut engine = Engine::new();
//! engine.load(Raster::from_fn(2, 2, 255, |_, _| Rgb::new(10, 20, 30)), "photo");
//!
//! let sepia = engine.color_transform(ColorTransform::Sepia, "photo", "old").unwrap();
//! assert_eq!(sepia.pixel(0, 0).r, 24);
//!
//! let component: GreyscaleComponent = "luma-component".parse().unwrap();
//! let grey = engine.greyscale(component, "photo", "grey").unwrap();
//! assert_eq!(grey.pixel(1, 1), Rgb::splat(19));
//! ```
//!
//! [`Raster`]: pixmill_core::Raster

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod channels;
pub mod color;
pub mod config;
pub mod dither;
pub mod engine;
pub mod filter;
pub mod kinds;
pub mod point;
pub mod transform;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{OpsError, OpsResult};
pub use kinds::{ColorTransform, DitherMode, FilterKind, GreyscaleComponent};
