mod support;

use std::collections::HashSet;

use pool_core::geo::{GeoPoint, DEFAULT_PICKUP_SPREAD_DEG};
use pool_core::names::{FEMALE_NAMES, MALE_NAMES};
use pool_core::test_helpers::{asha_request, sample_pool};
use pool_core::{Gender, Provider, GROUP_CAP};
use support::{added_members, allocate, base_request, SEEDS};

#[test]
fn asha_scenario_fills_female_only_pool() {
    let pool = sample_pool();

    assert_eq!(pool.rider_count(), 4);
    assert_eq!(pool.members[0].id, "U1");
    assert_eq!(pool.members[0].name, "Asha");
    assert!(pool.members[1..]
        .iter()
        .all(|member| member.gender == Some(Gender::Female)));
    assert_eq!(
        pool.meetup_point.as_ref().map(|stop| stop.name.as_str()),
        Some("IIT Bombay Gate")
    );
    assert_eq!(pool.deep_link.as_deref(), Some("https://m.uber.com/"));
    assert_eq!(pool.owner_id.as_deref(), Some("U1"));
}

#[test]
fn full_party_gets_no_sampled_riders() {
    let request = base_request(Provider::Ola).with_party_size(4);
    let pool = allocate(7, &request);

    assert_eq!(pool.rider_count(), 4);
    assert_eq!(pool.members[0].name, "You");
    for (i, member) in pool.members.iter().enumerate().skip(1) {
        assert_eq!(member.name, format!("You Friend {i}"));
    }
    assert!(pool
        .members
        .iter()
        .all(|m| !FEMALE_NAMES.contains(&m.name.as_str()) && !MALE_NAMES.contains(&m.name.as_str())));
    assert_eq!(pool.deep_link.as_deref(), Some("https://book.olacabs.com/"));
}

#[test]
fn party_size_out_of_range_is_clamped() {
    let low = allocate(1, &base_request(Provider::Uber).with_party_size(0));
    assert_eq!(low.rider_count(), 4);
    assert_eq!(added_members(&low, 0).len(), 3);

    let high = allocate(1, &base_request(Provider::Uber).with_party_size(9));
    assert_eq!(high.rider_count(), 4);
    assert_eq!(added_members(&high, 9).len(), 0);
    assert_eq!(high.members[3].name, "You Friend 3");
}

#[test]
fn members_and_pickups_stay_aligned_and_capped() {
    for seed in SEEDS {
        for party_size in -1..=6 {
            let pool = allocate(seed, &base_request(Provider::Uber).with_party_size(party_size));
            assert!(pool.rider_count() <= GROUP_CAP);
            assert_eq!(pool.members.len(), pool.pickup_points.len());
            for (member, pickup) in pool.members.iter().zip(&pool.pickup_points) {
                assert_eq!(pickup.name, format!("{} Pickup", member.name));
            }
        }
    }
}

#[test]
fn member_ids_are_unique() {
    for seed in SEEDS {
        let pool = allocate(seed, &base_request(Provider::Uber));
        let ids: HashSet<&str> = pool.members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), pool.rider_count());
    }
}

#[test]
fn supplied_owner_id_leads_the_pool() {
    for seed in SEEDS {
        let pool = allocate(seed, &asha_request().with_party_size(2));
        assert_eq!(pool.members[0].id, "U1");
        assert_eq!(pool.members[1].name, "Asha Friend 1");
        assert_eq!(pool.members[1].gender, Some(Gender::Female));
    }
}

#[test]
fn female_requester_gets_only_female_additions() {
    for seed in SEEDS {
        let request = asha_request();
        let pool = allocate(seed, &request);
        assert!(added_members(&pool, request.party_size)
            .iter()
            .all(|member| member.gender == Some(Gender::Female)));
    }
}

#[test]
fn female_only_ignored_for_male_requester() {
    let request = base_request(Provider::Uber)
        .with_female_only(true)
        .with_owner(Some("U7".into()), Some("Rohan".into()), Some(Gender::Male));

    let genders: HashSet<Option<Gender>> = SEEDS
        .flat_map(|seed| {
            let pool = allocate(seed, &request);
            added_members(&pool, 1)
                .iter()
                .map(|member| member.gender)
                .collect::<Vec<_>>()
        })
        .collect();

    assert!(genders.contains(&Some(Gender::Male)));
    assert!(genders.contains(&Some(Gender::Female)));
}

#[test]
fn sampled_names_follow_position_in_list() {
    for seed in SEEDS {
        let pool = allocate(seed, &base_request(Provider::Uber));
        for (i, member) in added_members(&pool, 1).iter().enumerate() {
            let expected = match member.gender {
                Some(Gender::Female) => FEMALE_NAMES[i],
                Some(Gender::Male) => MALE_NAMES[i],
                None => panic!("sampled member without gender"),
            };
            assert_eq!(member.name, expected);
        }
    }
}

#[test]
fn pickups_scatter_around_origin() {
    let origin = GeoPoint::new(19.076, 72.8777);
    let request = base_request(Provider::Uber).with_origin(origin.lat, origin.lng);

    for seed in SEEDS {
        let pool = allocate(seed, &request);
        for pickup in &pool.pickup_points {
            assert!((pickup.lat - origin.lat).abs() <= DEFAULT_PICKUP_SPREAD_DEG / 2.0);
            assert!((pickup.lng - origin.lng).abs() <= DEFAULT_PICKUP_SPREAD_DEG / 2.0);
            let km = origin.distance_km(pickup.point()).expect("valid pickup");
            assert!(km < 1.0, "pickup {km} km away");
        }
    }
}

#[test]
fn missing_origin_uses_default_point() {
    let pool = allocate(3, &base_request(Provider::Uber).with_party_size(1));
    let meetup = pool.meetup_point.expect("meetup");
    assert_eq!(meetup.point(), GeoPoint::default_origin());
}

#[test]
fn rapido_pool_has_no_deep_link() {
    let pool = allocate(5, &base_request(Provider::Rapido));
    assert_eq!(pool.provider, Provider::Rapido);
    assert_eq!(pool.deep_link, None);
    assert_eq!(pool.rider_count(), 4);
}
