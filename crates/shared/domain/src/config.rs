use crate::capabilities::Capabilities;
use crate::settings::Settings;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared across the slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlugEqConfigInner {
    pub settings: Settings,
    pub store: StoreConfig,
    pub plugins: PluginsConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SlugEqConfig {
    #[serde(flatten, default)]
    inner: Arc<SlugEqConfigInner>,
}

impl Deref for SlugEqConfig {
    type Target = SlugEqConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SlugEqConfig {
    fn deref_mut(&mut self) -> &mut SlugEqConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Override record storage.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub create: bool,
    /// Read cache entries; `0` disables the cache.
    pub cache_capacity: u64,
}

/// Host plugins known to be installed and enabled.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub commerce: bool,
}

impl PluginsConfig {
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        if self.commerce { Capabilities::COMMERCE } else { Capabilities::empty() }
    }
}

/// Logging output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for StoreConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data/overrides"), create: true, cache_capacity: 10_000 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, path: None, json: false }
    }
}
