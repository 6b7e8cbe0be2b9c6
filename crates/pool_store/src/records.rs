use pool_core::{Gender, Pool, Provider};
use serde::{Deserialize, Serialize};

/// Row in the `pools` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolRecord {
    pub id: String,
    pub provider: Provider,
    pub owner_id: Option<String>,
    pub meetup_name: Option<String>,
    pub meetup_lat: Option<f64>,
    pub meetup_lng: Option<f64>,
    pub deep_link: Option<String>,
}

/// Row in the `pool_members` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolMemberRecord {
    pub pool_id: String,
    pub user_id: String,
    pub name: String,
    pub gender: Option<Gender>,
}

/// Row in the `pool_stops` table. Only pickup points are stored here; the
/// meetup lives on the pool row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolStopRecord {
    pub pool_id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolRecordSet {
    pub pool: PoolRecord,
    pub members: Vec<PoolMemberRecord>,
    pub stops: Vec<PoolStopRecord>,
}

impl PoolRecordSet {
    pub fn from_pool(pool: &Pool) -> Self {
        let meetup = pool.meetup_point.as_ref();
        let record = PoolRecord {
            id: pool.id.clone(),
            provider: pool.provider,
            owner_id: pool.owner_id.clone(),
            meetup_name: meetup.map(|stop| stop.name.clone()),
            meetup_lat: meetup.map(|stop| stop.lat),
            meetup_lng: meetup.map(|stop| stop.lng),
            deep_link: pool.deep_link.clone(),
        };

        let members = pool
            .members
            .iter()
            .map(|member| PoolMemberRecord {
                pool_id: pool.id.clone(),
                user_id: member.id.clone(),
                name: member.name.clone(),
                gender: member.gender,
            })
            .collect();

        let stops = pool
            .pickup_points
            .iter()
            .map(|stop| PoolStopRecord {
                pool_id: pool.id.clone(),
                name: stop.name.clone(),
                lat: stop.lat,
                lng: stop.lng,
            })
            .collect();

        Self {
            pool: record,
            members,
            stops,
        }
    }
}
