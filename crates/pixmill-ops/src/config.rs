//! Engine configuration.
//!
//! Loaded from YAML. Every key is optional:
//!
//! ```yaml
//! dither: floyd-steinberg   # or: legacy (default)
//! ```
//!
//! ```rust
//! use pixmill_ops::{DitherMode, EngineConfig};
//!
//! let cfg = EngineConfig::from_yaml("dither: floyd-steinberg").unwrap();
//! assert_eq!(cfg.dither, DitherMode::FloydSteinberg);
//! ```

use crate::kinds::DitherMode;
use crate::{OpsError, OpsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Tunables for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Error propagation used by `dither`.
    pub dither: DitherMode,
}

impl EngineConfig {
    /// Parses a YAML document. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> OpsResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| OpsError::Config(e.to_string()))
    }

    /// Reads and parses a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| OpsError::Config(format!("{}: {e}", path.display())))?;
        let cfg = Self::from_yaml(&content).map_err(|e| match e {
            OpsError::Config(msg) => OpsError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        debug!(path = %path.display(), dither = %cfg.dither, "Loaded engine config");
        Ok(cfg)
    }

    /// Returns a copy with the dither mode replaced.
    pub fn with_dither(mut self, dither: DitherMode) -> Self {
        self.dither = dither;
        self
    }
}
