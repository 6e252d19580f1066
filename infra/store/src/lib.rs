//! Persistence for per-element slug overrides.
//!
//! Exactly one fact is stored per element: whether an administrator explicitly
//! overrode the content-type default, and to which value. Writes are upserts keyed by
//! [`ElementId`]; a missing record reads as [`OverrideState::NotOverridden`].
//!
//! # Backends
//!
//! - **[`MemoryOverrideStore`]**: process-local map, for tests and embedded hosts.
//! - **[`FileOverrideStore`]**: durable, one JSON record per element inside a sharded
//!   directory tree. Writes use an atomic swap (unique temp write + `fsync` + `rename`),
//!   so a failed write leaves the previous record intact. An optional read cache is
//!   written through on every successful upsert.
//!
//! # Examples
//!
//! ```rust
//! use slugeq_store::{FileOverrideStore, OverrideStore, StoreError};
//! use slugeq_domain::element::ElementId;
//! use slugeq_domain::overrides::OverrideState;
//!
//! fn main() -> Result<(), StoreError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # let root = tmp.path().join("overrides");
//!     let store = FileOverrideStore::builder().root(&root).cache_capacity(1_000).open()?;
//!
//!     store.set_override(ElementId(42), false)?;
//!     assert_eq!(store.get_override(ElementId(42))?, OverrideState::Overridden(false));
//!     assert_eq!(store.get_override(ElementId(7))?, OverrideState::NotOverridden);
//!     Ok(())
//! }
//! ```

mod error;
mod file;
mod memory;

pub use error::{StoreError, StoreErrorExt};
pub use file::{FileOverrideStore, FileOverrideStoreBuilder};
pub use memory::MemoryOverrideStore;

use slugeq_domain::element::ElementId;
use slugeq_domain::overrides::{OverrideRecord, OverrideState};
use std::fmt::Debug;
use std::sync::Arc;

/// Upsert-by-key persistence of per-element overrides.
///
/// Implementations must make each `set_override` atomic per element: concurrent
/// writers to the same id resolve to one of the written values, never a torn record.
pub trait OverrideStore: Debug + Send + Sync {
    /// Looks up the stored decision for `id`. Absence is not an error.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the backing storage cannot be read.
    fn get_override(&self, id: ElementId) -> Result<OverrideState, StoreError>;

    /// Creates or updates the record for `id`. Idempotent.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the write fails; the prior state is kept.
    fn set_override(&self, id: ElementId, enabled: bool) -> Result<(), StoreError>;

    /// All stored records, ordered by element id.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the backing storage cannot be enumerated.
    fn records(&self) -> Result<Vec<OverrideRecord>, StoreError>;
}

impl<T: OverrideStore + ?Sized> OverrideStore for Arc<T> {
    fn get_override(&self, id: ElementId) -> Result<OverrideState, StoreError> {
        (**self).get_override(id)
    }

    fn set_override(&self, id: ElementId, enabled: bool) -> Result<(), StoreError> {
        (**self).set_override(id, enabled)
    }

    fn records(&self) -> Result<Vec<OverrideRecord>, StoreError> {
        (**self).records()
    }
}
