pub mod allocator;
pub mod driver;
pub mod fare;
pub mod geo;
pub mod ids;
pub mod model;
pub mod names;
pub mod user;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use allocator::{AllocatorConfig, PoolAllocator, GROUP_CAP};
pub use model::{Gender, MatchRequest, Pool, PoolMember, PoolStop, Provider};
