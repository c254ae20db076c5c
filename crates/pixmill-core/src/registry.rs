//! Named-image registry.
//!
//! The [`Registry`] maps caller-chosen, case-sensitive names to [`Raster`]s.
//! It is a plain value owned by one processing session; there is no global
//! instance. Storing under an existing name replaces the previous raster.
//!
//! For front ends that share one registry between threads,
//! [`SharedRegistry`] serializes every lookup-then-store sequence behind a
//! single mutex.
//!
//! # Example
//!
//! ```rust
//! use pixmill_core::{Raster, Registry, Rgb};
//!
//! let mut reg = Registry::new();
//! let img = Raster::from_fn(1, 1, 255, |_, _| Rgb::BLACK);
//! reg.put("koala", img.clone());
//!
//! assert_eq!(reg.get("koala"), Some(img));
//! assert_eq!(reg.get("Koala"), None);
//! ```

use crate::{Error, Raster, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::trace;

/// Session-scoped mapping from image name to raster.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    images: HashMap<String, Raster>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `raster` under `name`, replacing any previous entry.
    pub fn put(&mut self, name: impl Into<String>, raster: Raster) {
        let name = name.into();
        trace!(name = %name, width = raster.width(), height = raster.height(), "registry put");
        self.images.insert(name, raster);
    }

    /// Looks up `name`. Absence is a normal outcome.
    pub fn get(&self, name: &str) -> Option<Raster> {
        self.images.get(name).cloned()
    }

    /// Looks up `name`, failing with [`Error::UnknownImage`] if absent.
    pub fn require(&self, name: &str) -> Result<Raster> {
        self.get(name).ok_or_else(|| Error::unknown_image(name))
    }

    /// Returns `true` if something is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// All stored names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.images.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// A [`Registry`] that can be shared between threads.
///
/// All access goes through [`with`](Self::with), so a lookup followed by a
/// store happens under one lock acquisition.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Wraps an existing registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Runs `f` with exclusive access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Non-failing lookup.
    pub fn get(&self, name: &str) -> Option<Raster> {
        self.lock().get(name)
    }

    /// Insert or replace.
    pub fn put(&self, name: impl Into<String>, raster: Raster) {
        self.lock().put(name, raster);
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // Entries are only ever inserted whole, so a poisoned map is still valid.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;
    use std::thread;

    fn grey(v: u32) -> Raster {
        Raster::from_fn(2, 2, 255, |_, _| Rgb::splat(v))
    }

    #[test]
    fn test_put_get() {
        let mut reg = Registry::new();
        assert!(reg.is_empty());
        reg.put("a", grey(1));
        assert_eq!(reg.len(), 1);
        assert!(reg.contains("a"));
        assert_eq!(reg.get("a"), Some(grey(1)));
    }

    #[test]
    fn test_overwrite() {
        let mut reg = Registry::new();
        reg.put("a", grey(1));
        reg.put("a", grey(2));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("a"), Some(grey(2)));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut reg = Registry::new();
        reg.put("b", grey(1));
        reg.put("B", grey(2));
        reg.put("a", grey(3));
        assert_eq!(reg.names(), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_require_missing() {
        let reg = Registry::new();
        let err = reg.require("nope").unwrap_err();
        assert!(err.is_unknown_image());
        assert!(reg.get("nope").is_none());
    }

    #[test]
    fn test_shared_registry_serializes_writers() {
        let shared = SharedRegistry::default();
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.with(|reg| {
                        let count = reg.len() as u32;
                        reg.put(format!("img{i}"), grey(count));
                    })
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.with(|reg| reg.len()), 8);
        assert!(shared.get("img0").is_some());
    }
}
