use crate::OverrideStore;
use crate::error::StoreError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use slugeq_domain::element::ElementId;
use slugeq_domain::overrides::{OverrideRecord, OverrideState};
use tracing::trace;

/// Process-local override store.
#[derive(Debug, Default)]
pub struct MemoryOverrideStore {
    records: RwLock<FxHashMap<ElementId, bool>>,
}

impl MemoryOverrideStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }
}

impl FromIterator<OverrideRecord> for MemoryOverrideStore {
    fn from_iter<I: IntoIterator<Item = OverrideRecord>>(iter: I) -> Self {
        let records = iter.into_iter().map(|r| (r.element_id, r.enabled)).collect();
        Self { records: RwLock::new(records) }
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn get_override(&self, id: ElementId) -> Result<OverrideState, StoreError> {
        Ok(self.records.read().get(&id).copied().into())
    }

    fn set_override(&self, id: ElementId, enabled: bool) -> Result<(), StoreError> {
        let previous = self.records.write().insert(id, enabled);
        trace!(element_id = %id, enabled, ?previous, "Override upserted");
        Ok(())
    }

    fn records(&self) -> Result<Vec<OverrideRecord>, StoreError> {
        let mut out: Vec<_> = self
            .records
            .read()
            .iter()
            .map(|(&element_id, &enabled)| OverrideRecord { element_id, enabled })
            .collect();
        out.sort_unstable_by_key(|r| r.element_id);
        Ok(out)
    }
}
