//! Thread-safe configuration storage.
//!
//! In-memory config shared by the event loop and the background fetch
//! tasks. CLI overrides are applied with [`ConfigStore::update`].

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
}

impl ConfigStore {
    /// Create a new ConfigStore from the loaded config.
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-place change (CLI overrides, theme switches).
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        f(&mut *self.inner.write());
    }
}
