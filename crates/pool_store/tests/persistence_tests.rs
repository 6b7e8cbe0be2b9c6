use std::sync::Arc;

use pool_core::driver::DriverConsole;
use pool_core::test_helpers::{asha_request, seeded_allocator};
use pool_store::memory::MemoryStore;
use pool_store::{PoolSink, SaveOutcome, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn memory_sink() -> (Arc<MemoryStore>, PoolSink) {
    let store = Arc::new(MemoryStore::new());
    let sink = PoolSink::new(Box::new(store.clone()));
    (store, sink)
}

#[test]
fn allocated_pool_round_trips_into_rows() {
    let (store, sink) = memory_sink();
    let pool = seeded_allocator().allocate(&asha_request());

    assert_eq!(sink.save(&pool), SaveOutcome::Saved);

    let tables = store.snapshot();
    let row = &tables.pools[0];
    assert_eq!(row.id, pool.id);
    assert_eq!(row.owner_id.as_deref(), Some("U1"));
    let meetup = pool.meetup_point.as_ref().expect("meetup");
    assert_eq!(row.meetup_lat, Some(meetup.lat));
    assert_eq!(row.meetup_lng, Some(meetup.lng));

    let member_ids: Vec<_> = tables.members.iter().map(|m| m.user_id.as_str()).collect();
    let pool_ids: Vec<_> = pool.members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(member_ids, pool_ids);
    for (stop, expected) in tables.stops.iter().zip(&pool.pickup_points) {
        assert_eq!(stop.name, expected.name);
        assert_eq!((stop.lat, stop.lng), (expected.lat, expected.lng));
    }
}

#[test]
fn failed_stop_write_keeps_earlier_rows() {
    let store = Arc::new(MemoryStore::failing_on(Table::PoolStops));
    let sink = PoolSink::new(Box::new(store.clone()));
    let pool = seeded_allocator().allocate(&asha_request());

    assert_eq!(sink.save(&pool), SaveOutcome::Failed);

    let tables = store.snapshot();
    assert_eq!(tables.pools.len(), 1);
    assert_eq!(tables.members.len(), pool.members.len());
    assert!(tables.stops.is_empty());
}

#[test]
fn driver_eviction_rewrites_stored_roster() {
    let (store, sink) = memory_sink();
    let mut rng = StdRng::seed_from_u64(11);
    let mut console = DriverConsole::with_demo_requests(&mut rng);
    let mut allocator = seeded_allocator();
    console.go_online();

    let request_id = console.visible_requests()[0].id.clone();
    let pool = console
        .accept(&request_id, &mut allocator)
        .expect("accept")
        .clone();
    assert_eq!(sink.save(&pool), SaveOutcome::Saved);

    let evicted = pool.members[1].id.clone();
    let updated = console.remove_member(&evicted).expect("remove").clone();
    assert_eq!(sink.rewrite_roster(&updated), SaveOutcome::Saved);

    let tables = store.snapshot();
    assert_eq!(tables.pools.len(), 1);
    assert_eq!(tables.members.len(), pool.members.len() - 1);
    assert_eq!(tables.stops.len(), pool.pickup_points.len() - 1);
    assert!(tables.members.iter().all(|m| m.user_id != evicted));
}

#[test]
fn rewrite_leaves_other_pools_alone() {
    let (store, sink) = memory_sink();
    let mut allocator = seeded_allocator();
    let first = allocator.allocate(&asha_request());
    let second = allocator.allocate(&asha_request());
    sink.save(&first);
    sink.save(&second);

    let trimmed = first
        .without_member(&first.members[2].id)
        .expect("member present");
    assert_eq!(sink.rewrite_roster(&trimmed), SaveOutcome::Saved);

    let tables = store.snapshot();
    let count = |pool_id: &str| tables.members.iter().filter(|m| m.pool_id == pool_id).count();
    assert_eq!(count(&first.id), first.members.len() - 1);
    assert_eq!(count(&second.id), second.members.len());
}

#[test]
fn evicting_the_owner_clears_stored_owner() {
    let (store, sink) = memory_sink();
    let mut rng = StdRng::seed_from_u64(11);
    let mut console = DriverConsole::with_demo_requests(&mut rng);
    let mut allocator = seeded_allocator();
    console.go_online();

    let request_id = console.visible_requests()[0].id.clone();
    let pool = console
        .accept(&request_id, &mut allocator)
        .expect("accept")
        .clone();
    assert_eq!(sink.save(&pool), SaveOutcome::Saved);
    assert_eq!(store.snapshot().pools[0].owner_id, pool.owner_id);

    let owner = pool.members[0].id.clone();
    let updated = console.remove_member(&owner).expect("remove").clone();
    assert_eq!(updated.owner_id, None);
    assert_eq!(sink.rewrite_roster(&updated), SaveOutcome::Saved);

    let tables = store.snapshot();
    assert_eq!(tables.pools.len(), 1);
    assert_eq!(tables.pools[0].owner_id, updated.owner_id);
    assert!(tables.members.iter().all(|m| m.user_id != owner));
    assert_eq!(tables.members.len(), updated.members.len());
}
