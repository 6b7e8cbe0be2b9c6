use pool_core::Pool;
use tracing::{debug, error, info};

use crate::error::StoreError;
use crate::records::PoolRecordSet;
use crate::store::PoolStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No store is configured.
    Skipped,
    /// A write failed; rows written before the failure remain.
    Failed,
}

impl SaveOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// Fire-and-forget front for a [`PoolStore`]. Never returns an error.
pub struct PoolSink {
    store: Option<Box<dyn PoolStore>>,
}

impl PoolSink {
    pub fn new(store: Box<dyn PoolStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn disabled() -> Self {
        Self { store: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Persist the pool row, then its members, then its pickup stops.
    pub fn save(&self, pool: &Pool) -> SaveOutcome {
        let Some(store) = self.store.as_deref() else {
            debug!(pool_id = %pool.id, "no pool store configured, skipping save");
            return SaveOutcome::Skipped;
        };

        match write_pool(store, &PoolRecordSet::from_pool(pool)) {
            Ok(()) => {
                info!(pool_id = %pool.id, members = pool.members.len(), "pool saved");
                SaveOutcome::Saved
            }
            Err(err) => {
                error!(pool_id = %pool.id, error = %err, "failed to save pool");
                SaveOutcome::Failed
            }
        }
    }

    /// Bring an already saved pool in line with its current roster: update the
    /// owner on the pool row, then replace its member and stop rows.
    pub fn rewrite_roster(&self, pool: &Pool) -> SaveOutcome {
        let Some(store) = self.store.as_deref() else {
            return SaveOutcome::Skipped;
        };

        match write_roster(store, &PoolRecordSet::from_pool(pool)) {
            Ok(()) => {
                info!(pool_id = %pool.id, members = pool.members.len(), "pool roster rewritten");
                SaveOutcome::Saved
            }
            Err(err) => {
                error!(pool_id = %pool.id, error = %err, "failed to rewrite pool roster");
                SaveOutcome::Failed
            }
        }
    }
}

/// Write every record set in order, stopping at the first failure. Empty
/// member or stop sets are not sent.
pub fn write_pool(store: &dyn PoolStore, records: &PoolRecordSet) -> Result<(), StoreError> {
    store.insert_pool(&records.pool)?;
    insert_children(store, records)
}

pub fn write_roster(store: &dyn PoolStore, records: &PoolRecordSet) -> Result<(), StoreError> {
    store.update_owner(&records.pool.id, records.pool.owner_id.as_deref())?;
    store.delete_members(&records.pool.id)?;
    store.delete_stops(&records.pool.id)?;
    insert_children(store, records)
}

fn insert_children(store: &dyn PoolStore, records: &PoolRecordSet) -> Result<(), StoreError> {
    if !records.members.is_empty() {
        store.insert_members(&records.members)?;
    }
    if !records.stops.is_empty() {
        store.insert_stops(&records.stops)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pool_core::test_helpers::sample_pool;

    use super::*;
    use crate::memory::MemoryStore;
    use crate::store::Table;

    #[test]
    fn save_writes_all_three_tables() {
        let store = Arc::new(MemoryStore::new());
        let sink = PoolSink::new(Box::new(store.clone()));

        assert_eq!(sink.save(&sample_pool()), SaveOutcome::Saved);

        let tables = store.snapshot();
        assert_eq!(tables.pools.len(), 1);
        assert_eq!(tables.members.len(), 4);
        assert_eq!(tables.stops.len(), 4);
        assert_eq!(store.calls(), vec![Table::Pools, Table::PoolMembers, Table::PoolStops]);
    }

    #[test]
    fn disabled_sink_skips() {
        let sink = PoolSink::disabled();
        assert!(!sink.is_enabled());
        assert_eq!(sink.save(&sample_pool()), SaveOutcome::Skipped);
        assert_eq!(sink.rewrite_roster(&sample_pool()), SaveOutcome::Skipped);
    }

    #[test]
    fn member_failure_stops_before_stops() {
        let store = Arc::new(MemoryStore::failing_on(Table::PoolMembers));
        let sink = PoolSink::new(Box::new(store.clone()));

        assert_eq!(sink.save(&sample_pool()), SaveOutcome::Failed);

        let tables = store.snapshot();
        assert_eq!(tables.pools.len(), 1);
        assert!(tables.members.is_empty());
        assert!(tables.stops.is_empty());
    }

    #[test]
    fn rewrite_updates_owner_before_roster() {
        let pool = sample_pool();
        let store = Arc::new(MemoryStore::new());
        write_pool(store.as_ref(), &PoolRecordSet::from_pool(&pool)).expect("write");

        let without_owner = pool.without_member("U1").expect("owner present");
        write_roster(store.as_ref(), &PoolRecordSet::from_pool(&without_owner)).expect("rewrite");

        assert_eq!(store.snapshot().pools[0].owner_id, None);
        assert_eq!(
            store.calls()[3..].to_vec(),
            vec![
                Table::Pools,
                Table::PoolMembers,
                Table::PoolStops,
                Table::PoolMembers,
                Table::PoolStops,
            ]
        );
    }

    #[test]
    fn failed_owner_update_leaves_roster_alone() {
        let pool = sample_pool();
        let store = Arc::new(MemoryStore::failing_on(Table::Pools));

        let result = write_roster(store.as_ref(), &PoolRecordSet::from_pool(&pool));

        assert!(result.is_err());
        assert_eq!(store.calls(), vec![Table::Pools]);
    }

    #[test]
    fn empty_roster_sends_only_pool_row() {
        let mut pool = sample_pool();
        pool.members.clear();
        pool.pickup_points.clear();
        let store = Arc::new(MemoryStore::new());

        write_pool(store.as_ref(), &PoolRecordSet::from_pool(&pool)).expect("write");
        assert_eq!(store.calls(), vec![Table::Pools]);
    }
}
