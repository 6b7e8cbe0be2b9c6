#![allow(dead_code)]

use pool_core::{MatchRequest, Pool, PoolAllocator, Provider, GROUP_CAP};

/// Seeds swept by property-style tests.
pub const SEEDS: std::ops::Range<u64> = 0..64;

pub fn base_request(provider: Provider) -> MatchRequest {
    MatchRequest::new("IIT Bombay", "Main Building", provider)
}

pub fn allocate(seed: u64, request: &MatchRequest) -> Pool {
    PoolAllocator::new(Some(seed)).allocate(request)
}

/// Members beyond the requester's own (clamped) party.
pub fn added_members(pool: &Pool, party_size: i32) -> &[pool_core::PoolMember] {
    let party = party_size.clamp(1, GROUP_CAP as i32) as usize;
    &pool.members[party.min(pool.members.len())..]
}
