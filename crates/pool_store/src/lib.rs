//! Best-effort persistence of allocated pools.
//!
//! A pool is written as three related record sets keyed by pool id: the pool
//! row, one row per member, and one row per pickup stop. Writes are not
//! transactional and a failure part-way leaves earlier rows in place.
//! [`PoolSink`] logs and swallows failures so the booking flow never depends
//! on persistence.

pub mod error;
pub mod records;
pub mod sink;
pub mod store;
pub mod supabase;

#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;

pub use error::StoreError;
pub use records::{PoolMemberRecord, PoolRecord, PoolRecordSet, PoolStopRecord};
pub use sink::{PoolSink, SaveOutcome};
pub use store::{PoolStore, Table};
pub use supabase::{SupabaseConfig, SupabaseStore};
