use std::sync::Arc;

use crate::error::StoreError;
use crate::records::{PoolMemberRecord, PoolRecord, PoolStopRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Pools,
    PoolMembers,
    PoolStops,
}

impl Table {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pools => "pools",
            Self::PoolMembers => "pool_members",
            Self::PoolStops => "pool_stops",
        }
    }
}

/// Durable store for pool records.
///
/// Each call is an independent write; there is no transaction spanning
/// calls. Delete operations remove every row of the table that belongs to
/// `pool_id`.
pub trait PoolStore: Send + Sync {
    fn insert_pool(&self, record: &PoolRecord) -> Result<(), StoreError>;
    /// Set `owner_id` on an existing pool row.
    fn update_owner(&self, pool_id: &str, owner_id: Option<&str>) -> Result<(), StoreError>;
    fn insert_members(&self, records: &[PoolMemberRecord]) -> Result<(), StoreError>;
    fn insert_stops(&self, records: &[PoolStopRecord]) -> Result<(), StoreError>;
    fn delete_members(&self, pool_id: &str) -> Result<(), StoreError>;
    fn delete_stops(&self, pool_id: &str) -> Result<(), StoreError>;
}

impl<S: PoolStore + ?Sized> PoolStore for Arc<S> {
    fn insert_pool(&self, record: &PoolRecord) -> Result<(), StoreError> {
        (**self).insert_pool(record)
    }

    fn update_owner(&self, pool_id: &str, owner_id: Option<&str>) -> Result<(), StoreError> {
        (**self).update_owner(pool_id, owner_id)
    }

    fn insert_members(&self, records: &[PoolMemberRecord]) -> Result<(), StoreError> {
        (**self).insert_members(records)
    }

    fn insert_stops(&self, records: &[PoolStopRecord]) -> Result<(), StoreError> {
        (**self).insert_stops(records)
    }

    fn delete_members(&self, pool_id: &str) -> Result<(), StoreError> {
        (**self).delete_members(pool_id)
    }

    fn delete_stops(&self, pool_id: &str) -> Result<(), StoreError> {
        (**self).delete_stops(pool_id)
    }
}
