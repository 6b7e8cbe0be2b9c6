use anyhow::Context;
use pool_core::driver::DriverConsole;
use pool_core::fare::{fare_split, group_savings, per_student_share, round_to_paise};
use pool_core::geo::round_km;
use pool_core::user::{AppUser, UserRole};
use pool_core::{MatchRequest, Pool, PoolAllocator, GROUP_CAP};
use pool_insights::{InsightsNarrator, RideDetails};
use pool_store::PoolSink;
use rand::Rng;
use serde_json::{json, Value};

use crate::cli::{Commands, DriverArgs, InsightsArgs, MatchArgs};
use crate::config::AppConfig;

const IDENTITY_STREAM: u64 = 0x5EED_0001;
const QUEUE_STREAM: u64 = 0x5EED_0002;

pub fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    let mut allocator = PoolAllocator::new(config.seed);

    let report = match command {
        Commands::Match(args) => {
            let sink = config.sink()?;
            let mut rng = config.rng(IDENTITY_STREAM);
            run_match(&args, &mut allocator, &mut rng, &sink)
        }
        Commands::Insights(args) => run_insights(&args, &config.narrator()),
        Commands::Driver(args) => {
            let sink = config.sink()?;
            let mut console = DriverConsole::with_demo_requests(&mut config.rng(QUEUE_STREAM));
            run_driver(&args, &mut console, &mut allocator, &sink)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn match_request<R: Rng + ?Sized>(args: &MatchArgs, rng: &mut R) -> MatchRequest {
    let trip = &args.trip;
    let mut request = MatchRequest::new(trip.college.clone(), trip.destination.clone(), trip.provider)
        .with_party_size(args.party_size)
        .with_female_only(args.female_only);

    if let (Some(lat), Some(lng)) = (trip.lat, trip.lng) {
        request = request.with_origin(lat, lng);
    }
    if let Some(gender) = args.gender {
        let user = AppUser::sign_in(
            UserRole::Passenger,
            args.name.as_deref().unwrap_or_default(),
            args.email.as_deref().unwrap_or_default(),
            gender,
            rng,
        );
        request = request.owned_by(&user);
    }
    request
}

pub fn run_match<R: Rng + ?Sized>(
    args: &MatchArgs,
    allocator: &mut PoolAllocator,
    rng: &mut R,
    sink: &PoolSink,
) -> Value {
    let pool = allocator.allocate(&match_request(args, rng));
    let persistence = sink.save(&pool);

    json!({
        "pool": pool,
        "pickupDistancesKm": pickup_distances_km(&pool),
        "persistence": persistence.as_str(),
    })
}

/// Straight-line distance from the meetup to each pickup, in pickup order.
fn pickup_distances_km(pool: &Pool) -> Vec<Option<f64>> {
    let Some(meetup) = pool.meetup_point.as_ref().map(|stop| stop.point()) else {
        return vec![None; pool.pickup_points.len()];
    };
    pool.pickup_points
        .iter()
        .map(|stop| meetup.distance_km(stop.point()).map(round_km))
        .collect()
}

pub fn run_insights(args: &InsightsArgs, narrator: &InsightsNarrator) -> Value {
    let trip = &args.trip;
    let mut details = RideDetails::new(
        trip.college.clone(),
        trip.destination.clone(),
        args.students,
        args.fare,
        trip.provider,
    );
    if let (Some(lat), Some(lng)) = (trip.lat, trip.lng) {
        details = details.with_origin(lat, lng);
    }

    let analysis = narrator.mobility_insights(&details);
    json!({
        "details": details,
        "analysis": analysis,
        "perStudentShare": round_to_paise(per_student_share(args.fare, args.students)),
        "savingsPerStudent": round_to_paise(group_savings(args.fare, args.students)),
    })
}

pub fn run_driver(
    args: &DriverArgs,
    console: &mut DriverConsole,
    allocator: &mut PoolAllocator,
    sink: &PoolSink,
) -> anyhow::Result<Value> {
    if args.list {
        return Ok(json!({ "requests": console.visible_requests() }));
    }

    // Positions refer to the roster as accepted. Check them before anything
    // is accepted or saved.
    let mut positions = args.no_show.clone();
    positions.sort_unstable();
    positions.dedup();
    if let Some(&position) = positions
        .iter()
        .find(|&&position| position == 0 || position > GROUP_CAP)
    {
        anyhow::bail!("no rider at roster position {}", position);
    }

    let request_id = match &args.request {
        Some(id) => id.clone(),
        None => console
            .visible_requests()
            .first()
            .map(|request| request.id.clone())
            .context("no ride requests queued")?,
    };

    console.go_online();
    let accepted = match console.accept(&request_id, allocator) {
        Ok(pool) => pool.clone(),
        Err(err) => {
            console.go_offline();
            return Err(err.into());
        }
    };

    let evicted = match roster_ids_at(&accepted, &positions) {
        Ok(ids) => ids,
        Err(err) => {
            console.end_trip();
            console.go_offline();
            return Err(err);
        }
    };

    let mut persistence = vec![sink.save(&accepted).as_str()];
    for member_id in &evicted {
        console.remove_member(member_id)?;
    }
    if !evicted.is_empty() {
        if let Some(pool) = console.active_pool() {
            persistence.push(sink.rewrite_roster(pool).as_str());
        }
    }

    let pool = console.end_trip().context("accepted pool is no longer active")?;
    let split = args.fare.map(|fare| fare_split(&pool, fare));
    console.go_offline();

    Ok(json!({
        "acceptedRequest": request_id,
        "evicted": evicted,
        "pool": pool,
        "fareSplit": split,
        "persistence": persistence,
        "remainingRequests": console.visible_requests(),
    }))
}

/// Member ids at the given 1-based roster positions.
fn roster_ids_at(pool: &Pool, positions: &[usize]) -> anyhow::Result<Vec<String>> {
    positions
        .iter()
        .map(|&position| {
            position
                .checked_sub(1)
                .and_then(|idx| pool.members.get(idx))
                .map(|member| member.id.clone())
                .with_context(|| format!("no rider at roster position {}", position))
        })
        .collect()
}
