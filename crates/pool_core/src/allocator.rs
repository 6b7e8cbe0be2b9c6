//! Pool allocation: turn a single match request into a capped rider group.
//!
//! The allocator is a single pass with no I/O:
//!
//! 1. Resolve the origin (caller position or the configured default)
//! 2. Clamp the requester's party to `1..=GROUP_CAP`
//! 3. Decide whether the female-only restriction applies
//! 4. Build the requester's party, then fill the group up to the cap with
//!    synthesized riders
//! 5. Scatter one pickup point per member around the origin and place the
//!    meetup at the origin itself
//!
//! Inputs are normalized rather than rejected, so allocation cannot fail.
//! Randomness comes from an owned `StdRng`; a fixed seed makes allocation
//! reproducible.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::geo::{jitter_around, resolve_origin, GeoPoint, DEFAULT_PICKUP_SPREAD_DEG};
use crate::ids::{unique_id, IdKind};
use crate::model::{Gender, MatchRequest, Pool, PoolMember, PoolStop};
use crate::names::{name_at, sample_gender};

/// Hard cap on riders per pool.
pub const GROUP_CAP: usize = 4;

const DEFAULT_OWNER_NAME: &str = "You";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocatorConfig {
    /// Origin used when the request carries no (valid) position.
    pub default_origin: GeoPoint,
    /// Full width in degrees of the square pickups are scattered in.
    pub pickup_spread_deg: f64,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            default_origin: GeoPoint::default_origin(),
            pickup_spread_deg: DEFAULT_PICKUP_SPREAD_DEG,
        }
    }
}

pub struct PoolAllocator {
    rng: StdRng,
    config: AllocatorConfig,
}

impl PoolAllocator {
    /// Allocator with default config. `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_config(seed, AllocatorConfig::default())
    }

    pub fn with_config(seed: Option<u64>, config: AllocatorConfig) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, config }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    pub fn allocate(&mut self, request: &MatchRequest) -> Pool {
        allocate_with(&self.config, request, &mut self.rng)
    }
}

/// Clamp a requested party size into `1..=GROUP_CAP`.
pub fn clamp_party_size(party_size: i32) -> usize {
    party_size.clamp(1, GROUP_CAP as i32) as usize
}

/// Female-only applies only when asked for by a requester who is female.
pub fn effective_female_only(request: &MatchRequest) -> bool {
    request.female_only.unwrap_or(false) && request.owner_gender == Some(Gender::Female)
}

/// Riders to synthesize on top of the requester's own party.
pub fn additional_needed(party: usize) -> usize {
    GROUP_CAP.saturating_sub(party)
}

/// Allocate a pool using an explicit random source.
pub fn allocate_with<R: Rng + ?Sized>(
    config: &AllocatorConfig,
    request: &MatchRequest,
    rng: &mut R,
) -> Pool {
    let origin = resolve_origin(request.current_lat, request.current_lng, config.default_origin);
    let party = clamp_party_size(request.party_size);
    let female_only = effective_female_only(request);
    let extra = additional_needed(party);

    let mut taken = HashSet::new();
    let mut members = owner_party(request, party, rng, &mut taken);
    members.extend(synthesize_riders(extra, female_only, rng, &mut taken));

    let pickup_points = members
        .iter()
        .map(|member| {
            PoolStop::at(
                format!("{} Pickup", member.name),
                jitter_around(origin, config.pickup_spread_deg, rng),
            )
        })
        .collect::<Vec<_>>();

    let meetup_point = PoolStop::at(format!("{} Gate", request.college_name), origin);
    let deep_link = request.provider.deep_link().map(str::to_string);
    if deep_link.is_none() {
        debug!(provider = %request.provider, "no deep link mapped for provider");
    }

    let owner_id = members.first().map(|member| member.id.clone());
    let pool_id = unique_id(IdKind::Pool, rng, &mut taken);

    debug!(
        pool_id = %pool_id,
        provider = %request.provider,
        party,
        synthesized = extra,
        female_only,
        "allocated pool"
    );

    Pool {
        id: pool_id,
        provider: request.provider,
        members,
        pickup_points,
        meetup_point: Some(meetup_point),
        deep_link,
        owner_id,
    }
}

fn owner_party<R: Rng + ?Sized>(
    request: &MatchRequest,
    party: usize,
    rng: &mut R,
    taken: &mut HashSet<String>,
) -> Vec<PoolMember> {
    let owner_name = request
        .owner_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_OWNER_NAME)
        .to_string();
    let owner_gender = request.owner_gender;

    let owner_id = match request.owner_id.as_deref() {
        Some(id) if !id.is_empty() => {
            taken.insert(id.to_string());
            id.to_string()
        }
        _ => unique_id(IdKind::User, rng, taken),
    };

    let mut members = Vec::with_capacity(GROUP_CAP);
    members.push(PoolMember {
        id: owner_id,
        name: owner_name.clone(),
        gender: owner_gender,
    });
    for i in 1..party {
        members.push(PoolMember {
            id: unique_id(IdKind::User, rng, taken),
            name: format!("{owner_name} Friend {i}"),
            gender: owner_gender,
        });
    }
    members
}

fn synthesize_riders<R: Rng + ?Sized>(
    count: usize,
    female_only: bool,
    rng: &mut R,
    taken: &mut HashSet<String>,
) -> Vec<PoolMember> {
    (0..count)
        .map(|i| {
            let gender = sample_gender(female_only, rng);
            PoolMember {
                id: unique_id(IdKind::User, rng, taken),
                name: name_at(gender, i).to_string(),
                gender: Some(gender),
            }
        })
        .collect()
}
