//! In-process store used by tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::records::{PoolMemberRecord, PoolRecord, PoolStopRecord};
use crate::store::{PoolStore, Table};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTables {
    pub pools: Vec<PoolRecord>,
    pub members: Vec<PoolMemberRecord>,
    pub stops: Vec<PoolStopRecord>,
}

#[derive(Debug, Default)]
struct State {
    tables: MemoryTables,
    calls: Vec<Table>,
}

/// Records every write and optionally rejects writes to one table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    fail_on: Option<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(table: Table) -> Self {
        Self {
            state: Mutex::default(),
            fail_on: Some(table),
        }
    }

    pub fn snapshot(&self) -> MemoryTables {
        self.lock().tables.clone()
    }

    /// Tables touched so far, in call order, including rejected calls.
    pub fn calls(&self) -> Vec<Table> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, table: Table) -> Result<MutexGuard<'_, State>, StoreError> {
        let mut state = self.lock();
        state.calls.push(table);
        if self.fail_on == Some(table) {
            return Err(StoreError::Api {
                table: table.as_str(),
                status: 503,
                body: "injected failure".to_string(),
            });
        }
        Ok(state)
    }
}

impl PoolStore for MemoryStore {
    fn insert_pool(&self, record: &PoolRecord) -> Result<(), StoreError> {
        self.begin(Table::Pools)?.tables.pools.push(record.clone());
        Ok(())
    }

    fn update_owner(&self, pool_id: &str, owner_id: Option<&str>) -> Result<(), StoreError> {
        let mut state = self.begin(Table::Pools)?;
        for row in state.tables.pools.iter_mut().filter(|row| row.id == pool_id) {
            row.owner_id = owner_id.map(str::to_string);
        }
        Ok(())
    }

    fn insert_members(&self, records: &[PoolMemberRecord]) -> Result<(), StoreError> {
        self.begin(Table::PoolMembers)?
            .tables
            .members
            .extend_from_slice(records);
        Ok(())
    }

    fn insert_stops(&self, records: &[PoolStopRecord]) -> Result<(), StoreError> {
        self.begin(Table::PoolStops)?
            .tables
            .stops
            .extend_from_slice(records);
        Ok(())
    }

    fn delete_members(&self, pool_id: &str) -> Result<(), StoreError> {
        self.begin(Table::PoolMembers)?
            .tables
            .members
            .retain(|row| row.pool_id != pool_id);
        Ok(())
    }

    fn delete_stops(&self, pool_id: &str) -> Result<(), StoreError> {
        self.begin(Table::PoolStops)?
            .tables
            .stops
            .retain(|row| row.pool_id != pool_id);
        Ok(())
    }
}
