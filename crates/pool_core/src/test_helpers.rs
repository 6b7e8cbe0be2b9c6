//! Shared fixtures for tests across the workspace.

use crate::allocator::PoolAllocator;
use crate::model::{Gender, MatchRequest, Pool, Provider};

/// Seed used by fixtures so allocations are reproducible.
pub const TEST_SEED: u64 = 42;

pub fn seeded_allocator() -> PoolAllocator {
    PoolAllocator::new(Some(TEST_SEED))
}

/// Female requester travelling alone, asking for a female-only Uber pool.
pub fn asha_request() -> MatchRequest {
    MatchRequest::new("IIT Bombay", "Main Building", Provider::Uber)
        .with_party_size(1)
        .with_female_only(true)
        .with_owner(
            Some("U1".to_string()),
            Some("Asha".to_string()),
            Some(Gender::Female),
        )
}

/// A pool allocated from [`asha_request`] with [`TEST_SEED`].
pub fn sample_pool() -> Pool {
    seeded_allocator().allocate(&asha_request())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_pool_is_reproducible() {
        assert_eq!(sample_pool(), sample_pool());
    }
}
