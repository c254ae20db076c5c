//! Session engine: named-image operations over a [`Registry`].
//!
//! Each operation looks up its sources, computes a complete new raster, and
//! only then stores it under the destination name. A failed lookup stores
//! nothing. Destination names may equal source names; the source is read in
//! full before the store.
//!
//! # Example
//!
//! ```rust
//! use pixmill_core::{Raster, Rgb};
//! use pixmill_ops::{Engine, FilterKind};
//!
//! let mut engine = Engine::new();
//! engine.load(Raster::from_fn(4, 4, 255, |x, _| Rgb::splat(x * 60)), "in");
//! engine.horizontal_flip("in", "flipped").unwrap();
//! engine.filter(FilterKind::Blur, "flipped", "flipped").unwrap();
//!
//! assert!(engine.save("flipped").is_some());
//! assert!(engine.horizontal_flip("missing", "out").is_err());
//! ```

use crate::channels;
use crate::color;
use crate::config::EngineConfig;
use crate::dither;
use crate::filter;
use crate::kinds::{ColorTransform, FilterKind, GreyscaleComponent};
use crate::point;
use crate::transform;
use crate::{OpsError, OpsResult};
use pixmill_core::{Raster, Registry};
use tracing::{debug, warn};

/// One processing session.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    registry: Registry,
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with an empty registry and default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with an empty registry and the given config.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// The images stored so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registers an already decoded raster under `name` and returns it.
    pub fn load(&mut self, raster: Raster, name: &str) -> Raster {
        debug!(name, width = raster.width(), height = raster.height(), "load");
        self.registry.put(name, raster.clone());
        raster
    }

    /// Returns the raster stored under `name`, if any.
    pub fn save(&self, name: &str) -> Option<Raster> {
        let found = self.registry.get(name);
        if found.is_none() {
            debug!(name, "save: no such image");
        }
        found
    }

    /// Mirrors `src` left-right into `dst`.
    pub fn horizontal_flip(&mut self, src: &str, dst: &str) -> OpsResult<Raster> {
        self.unary("horizontal-flip", src, dst, transform::flip_h)
    }

    /// Mirrors `src` top-bottom into `dst`.
    pub fn vertical_flip(&mut self, src: &str, dst: &str) -> OpsResult<Raster> {
        self.unary("vertical-flip", src, dst, transform::flip_v)
    }

    /// Adds `delta` to every channel of `src`, clamped, into `dst`.
    pub fn brighten(&mut self, delta: i32, src: &str, dst: &str) -> OpsResult<Raster> {
        self.unary("brighten", src, dst, |img| point::brighten(img, delta))
    }

    /// Greyscale of `src` by `component` into `dst`.
    pub fn greyscale(
        &mut self,
        component: GreyscaleComponent,
        src: &str,
        dst: &str,
    ) -> OpsResult<Raster> {
        self.unary("greyscale", src, dst, |img| point::greyscale(img, component))
    }

    /// Applies a fixed color matrix to `src` into `dst`.
    pub fn color_transform(
        &mut self,
        kind: ColorTransform,
        src: &str,
        dst: &str,
    ) -> OpsResult<Raster> {
        self.unary("color-transform", src, dst, |img| color::color_transform(img, kind))
    }

    /// Applies a fixed convolution filter to `src` into `dst`.
    pub fn filter(&mut self, kind: FilterKind, src: &str, dst: &str) -> OpsResult<Raster> {
        self.unary("filter", src, dst, |img| filter::filter(img, kind))
    }

    /// Dithers `src` to black and white into `dst`.
    ///
    /// Uses the configured [`DitherMode`](crate::DitherMode). Only `dst` is
    /// written.
    pub fn dither(&mut self, src: &str, dst: &str) -> OpsResult<Raster> {
        let mode = self.config.dither;
        self.unary("dither", src, dst, |img| dither::dither(img, mode))
    }

    /// Splits `src` into greyscale rasters stored under `r`, `g` and `b`.
    pub fn split(&mut self, src: &str, r: &str, g: &str, b: &str) -> OpsResult<[Raster; 3]> {
        let source = self.lookup("rgb-split", src)?;
        let planes = channels::split(&source);
        for (name, plane) in [r, g, b].into_iter().zip(planes.iter()) {
            self.registry.put(name, plane.clone());
        }
        debug!(src, r, g, b, width = source.width(), height = source.height(), "rgb-split");
        Ok(planes)
    }

    /// Stores the red of `r`, green of `g` and blue of `b` as `dst`.
    pub fn combine(&mut self, dst: &str, r: &str, g: &str, b: &str) -> OpsResult<Raster> {
        let red = self.lookup("rgb-combine", r)?;
        let green = self.lookup("rgb-combine", g)?;
        let blue = self.lookup("rgb-combine", b)?;
        let out = channels::combine(&red, &green, &blue).inspect_err(|e| {
            warn!(dst, error = %e, "rgb-combine failed");
        })?;
        self.store("rgb-combine", dst, out)
    }

    fn lookup(&self, op: &'static str, name: &str) -> OpsResult<Raster> {
        self.registry.require(name).map_err(|e| {
            warn!(op, error = %e, "lookup failed");
            OpsError::UnknownImage(name.to_string())
        })
    }

    fn store(&mut self, op: &'static str, dst: &str, out: Raster) -> OpsResult<Raster> {
        debug!(op, dst, width = out.width(), height = out.height(), "stored");
        self.registry.put(dst, out.clone());
        Ok(out)
    }

    fn unary<F>(&mut self, op: &'static str, src: &str, dst: &str, f: F) -> OpsResult<Raster>
    where
        F: FnOnce(&Raster) -> Raster,
    {
        let source = self.lookup(op, src)?;
        let out = f(&source);
        self.store(op, dst, out)
    }
}
