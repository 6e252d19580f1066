use crate::error::{StoreError, StoreErrorExt};
use crate::file::{FileOverrideStore, FileStoreInner, maintenance};
use moka::sync::Cache;
use parking_lot::Mutex;
use private::Sealed;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Per-process sequence of opened handles, keeping their temp names apart.
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
struct FileStoreConfig {
    create: bool,
    cache_capacity: u64,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self { create: true, cache_capacity: 0 }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct FileOverrideStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    config: FileStoreConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> FileOverrideStoreBuilder<S> {
    #[must_use = "Sets whether the store root should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }

    /// Bounds the read cache; `0` disables it.
    #[must_use = "Sets the read cache capacity of the store"]
    pub const fn cache_capacity(mut self, capacity: u64) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> FileOverrideStoreBuilder<N> {
        FileOverrideStoreBuilder { state, config: self.config }
    }
}

impl FileOverrideStoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory of the store"]
    pub fn root(self, path: impl Into<PathBuf>) -> FileOverrideStoreBuilder<WithRoot> {
        self.transition(WithRoot(path.into()))
    }
}

impl FileOverrideStoreBuilder<WithRoot> {
    /// Consumes the configuration and opens the store.
    ///
    /// Boot sequence:
    /// 1. **Bootstrapping**: creates the root directory if `create(true)` was set.
    /// 2. **Canonicalization**: resolves the root to an absolute physical path.
    /// 3. **Self-Healing**: removes temp files orphaned by interrupted writes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DirectoryNotFound`] if the root is missing and `create` is false.
    /// Returns [`StoreError::Io`] if the root cannot be created or resolved.
    pub fn open(self) -> Result<FileOverrideStore, StoreError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .context(format!("Failed to bootstrap store root: {}", root.display()))?;
            info!(path = %root.display(), "Bootstrapped override store root");
        } else if !root.is_dir() {
            return Err(StoreError::DirectoryNotFound {
                message: root.display().to_string().into(),
                context: Some("Store root does not exist and creation is disabled".into()),
            });
        }

        let canonical = fs::canonicalize(root)
            .context(format!("Failed to resolve store root: {}", root.display()))?;

        let cache = (self.config.cache_capacity > 0)
            .then(|| Cache::builder().max_capacity(self.config.cache_capacity).build());

        maintenance::purge_tmp(&canonical);

        info!(
            path = %canonical.display(),
            cache_capacity = self.config.cache_capacity,
            "Override store opened"
        );

        Ok(FileOverrideStore {
            inner: Arc::new(FileStoreInner {
                root: canonical,
                cache,
                write_lock: Mutex::new(()),
                nonce: NEXT_HANDLE.fetch_add(1, Ordering::Relaxed),
                tmp_counter: AtomicU64::new(1),
            }),
        })
    }
}
