//! Durable override store backed by one JSON file per element.

mod builder;
mod layout;
mod maintenance;

pub use builder::FileOverrideStoreBuilder;

use crate::OverrideStore;
use crate::error::{StoreError, StoreErrorExt};
use layout::{MAX_TMP_ATTEMPTS, RECORDS_DIR, TMP_MARKER, parse_record_name, record_path};
use moka::sync::Cache;
use parking_lot::Mutex;
use slugeq_domain::element::ElementId;
use slugeq_domain::overrides::{OverrideRecord, OverrideState};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument, trace, warn};
use walkdir::WalkDir;

/// The internal shared state of a [`FileOverrideStore`].
#[derive(Debug)]
pub struct FileStoreInner {
    /// Canonicalized physical root of the store.
    pub(crate) root: PathBuf,
    /// Read-through cache, written through on every successful upsert.
    pub(crate) cache: Option<Cache<ElementId, OverrideState>>,
    /// Serializes upserts and cache fills so the cache never trails the disk.
    pub(crate) write_lock: Mutex<()>,
    /// Distinguishes this handle's temp files from other handles in the process.
    pub(crate) nonce: u64,
    /// Next temp file sequence number of this handle.
    pub(crate) tmp_counter: AtomicU64,
}

/// A thread-safe, durable [`OverrideStore`].
///
/// Each record lives at `<root>/records/<lo>/<hi>/<id>.json` and holds
/// `{"elementId": <id>, "enabled": <bool>}`. Upserts replace the whole file through an
/// atomic rename, so readers observe either the previous or the new record.
///
/// The read cache assumes this handle is the only writer of its root. Hosts that share
/// one root between processes should open with `cache_capacity(0)`.
///
/// This handle is internally reference-counted (`Arc`) and can be cheaply cloned.
#[derive(Debug, Clone)]
pub struct FileOverrideStore {
    pub(crate) inner: Arc<FileStoreInner>,
}

impl Deref for FileOverrideStore {
    type Target = FileStoreInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FileOverrideStore {
    #[must_use = "The store is not opened until you call .open()"]
    pub fn builder() -> FileOverrideStoreBuilder {
        FileOverrideStoreBuilder::new()
    }

    /// Physical root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Physical location of the record for `id`, whether or not it exists.
    #[must_use]
    pub fn record_path(&self, id: ElementId) -> PathBuf {
        record_path(&self.root, id)
    }

    fn read_record(&self, id: ElementId) -> Result<OverrideState, StoreError> {
        let path = self.record_path(id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(OverrideState::NotOverridden),
            Err(err) => {
                return Err(StoreError::Io {
                    source: err,
                    context: Some(format!("Read failed: {}", path.display()).into()),
                });
            },
        };

        let record = decode(&path, &bytes)?;
        if record.element_id != id {
            return Err(StoreError::Corrupted {
                message: format!("expected element {id}, found {}", record.element_id).into(),
                context: Some(path.display().to_string().into()),
            });
        }
        Ok(OverrideState::Overridden(record.enabled))
    }

    fn write_atomic(&self, target: &Path, data: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create shards for {}", target.display()))?;
        }

        let (file, temp) = self.create_tmp(target)?;
        if let Err(err) = swap_in(file, &temp, target, data) {
            if let Err(cleanup) = fs::remove_file(&temp)
                && cleanup.kind() != ErrorKind::NotFound
            {
                warn!(path = %temp.display(), error = %cleanup, "Temp file cleanup failed");
            }
            return Err(err);
        }

        if let Some(parent) = target.parent() {
            sync_dir(parent);
        }
        Ok(())
    }

    /// Claims a temp file beside `target`, skipping names another writer already holds.
    fn create_tmp(&self, target: &Path) -> Result<(fs::File, PathBuf), StoreError> {
        for _ in 0..MAX_TMP_ATTEMPTS {
            let n = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
            let temp = tmp_path(target, self.nonce, n);
            match fs::OpenOptions::new().create_new(true).write(true).open(&temp) {
                Ok(file) => return Ok((file, temp)),
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    trace!(path = %temp.display(), "Temp name taken");
                },
                Err(err) => {
                    return Err(StoreError::Io {
                        source: err,
                        context: Some(format!("Temp creation failed: {}", temp.display()).into()),
                    });
                },
            }
        }

        Err(StoreError::Io {
            source: io::Error::from(ErrorKind::AlreadyExists),
            context: Some(format!("No free temp name for {}", target.display()).into()),
        })
    }
}

impl OverrideStore for FileOverrideStore {
    #[instrument(level = "trace", skip(self), fields(element_id = %id))]
    fn get_override(&self, id: ElementId) -> Result<OverrideState, StoreError> {
        let Some(cache) = &self.cache else {
            return self.read_record(id);
        };
        if let Some(state) = cache.get(&id) {
            return Ok(state);
        }

        let _guard = self.write_lock.lock();
        if let Some(state) = cache.get(&id) {
            return Ok(state);
        }
        let state = self.read_record(id)?;
        cache.insert(id, state);
        Ok(state)
    }

    #[instrument(level = "debug", skip(self), fields(element_id = %id))]
    fn set_override(&self, id: ElementId, enabled: bool) -> Result<(), StoreError> {
        let record = OverrideRecord { element_id: id, enabled };
        let body = serde_json::to_vec(&record).context("Encoding override record")?;
        let target = self.record_path(id);

        let _guard = self.write_lock.lock();
        self.write_atomic(&target, &body)?;
        if let Some(cache) = &self.cache {
            cache.insert(id, OverrideState::Overridden(enabled));
        }

        debug!(path = %target.display(), enabled, "Override saved atomically");
        Ok(())
    }

    fn records(&self) -> Result<Vec<OverrideRecord>, StoreError> {
        let dir = self.root.join(RECORDS_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for entry in WalkDir::new(&dir) {
            let entry = entry.map_err(|e| StoreError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Listing {}", dir.display()).into()),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(id) = parse_record_name(entry.path()) else { continue };

            match self.read_record(id) {
                Ok(OverrideState::Overridden(enabled)) => {
                    out.push(OverrideRecord { element_id: id, enabled });
                },
                Ok(OverrideState::NotOverridden) => {},
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "Skipping unreadable record");
                },
            }
        }

        out.sort_unstable_by_key(|r| r.element_id);
        Ok(out)
    }
}

fn decode(path: &Path, bytes: &[u8]) -> Result<OverrideRecord, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupted {
        message: e.to_string().into(),
        context: Some(path.display().to_string().into()),
    })
}

/// Fills the claimed temp file, syncs it, and renames it over `target`.
fn swap_in(mut file: fs::File, temp: &Path, target: &Path, data: &[u8]) -> Result<(), StoreError> {
    file.write_all(data).context("Write failed")?;
    file.sync_all().context("Hardware sync failed")?;
    drop(file);

    fs::rename(temp, target).context(format!(
        "Atomic swap failed: {} -> {}",
        temp.display(),
        target.display()
    ))
}

fn sync_dir(path: &Path) {
    match fs::File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                debug!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            debug!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}

fn tmp_path(target: &Path, nonce: u64, n: u64) -> PathBuf {
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("record");
    target.with_file_name(format!("{file_name}{TMP_MARKER}{}-{nonce}.{n}", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn open(dir: &TempDir, cache_capacity: u64) -> FileOverrideStore {
        FileOverrideStore::builder()
            .root(dir.path().join("overrides"))
            .cache_capacity(cache_capacity)
            .open()
            .unwrap()
    }

    /// Occupies the next `count` temp names `store` would pick for `id`.
    fn occupy_tmp_names(store: &FileOverrideStore, id: ElementId, count: u32) -> Vec<PathBuf> {
        let target = store.record_path(id);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        let next = store.tmp_counter.load(Ordering::Relaxed);
        (next..next + u64::from(count))
            .map(|n| {
                let path = tmp_path(&target, store.nonce, n);
                fs::write(&path, b"held elsewhere").unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn handles_get_distinct_temp_names() {
        let dir = tempdir().unwrap();
        let a = open(&dir, 0);
        let b = open(&dir, 0);

        assert_ne!(a.nonce, b.nonce);
        let target = a.record_path(ElementId(1));
        assert_ne!(tmp_path(&target, a.nonce, 1), tmp_path(&target, b.nonce, 1));
    }

    #[test]
    fn taken_temp_name_is_skipped_and_kept() {
        let dir = tempdir().unwrap();
        let store = open(&dir, 0);
        let taken = occupy_tmp_names(&store, ElementId(1), 1);

        store.set_override(ElementId(1), true).unwrap();

        assert_eq!(fs::read(&taken[0]).unwrap(), b"held elsewhere");
        assert_eq!(store.get_override(ElementId(1)).unwrap(), OverrideState::Overridden(true));
    }

    #[test]
    fn failed_upsert_keeps_prior_record_and_cache() {
        let dir = tempdir().unwrap();
        let store = open(&dir, 8);
        store.set_override(ElementId(5), true).unwrap();

        let taken = occupy_tmp_names(&store, ElementId(5), MAX_TMP_ATTEMPTS);
        let err = store.set_override(ElementId(5), false).unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }), "got {err}");
        assert_eq!(store.get_override(ElementId(5)).unwrap(), OverrideState::Overridden(true));
        let cache = store.cache.as_ref().unwrap();
        assert_eq!(cache.get(&ElementId(5)), Some(OverrideState::Overridden(true)));

        let uncached = open(&dir, 0);
        assert_eq!(uncached.get_override(ElementId(5)).unwrap(), OverrideState::Overridden(true));
        assert!(taken.iter().all(|path| path.exists()), "foreign temp files survive");
    }
}
