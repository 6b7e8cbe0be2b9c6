//! Pool data model: providers, riders, stops and match requests.
//!
//! All types serialize with camelCase field names so they can be handed to a
//! front-end unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// External ride-booking provider the pool is handed off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Uber,
    Ola,
    Rapido,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uber => "Uber",
            Self::Ola => "Ola",
            Self::Rapido => "Rapido",
        }
    }

    /// Booking hand-off URL. Rapido has no mapping yet.
    pub fn deep_link(self) -> Option<&'static str> {
        match self {
            Self::Uber => Some("https://m.uber.com/"),
            Self::Ola => Some("https://book.olacabs.com/"),
            Self::Rapido => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported provider '{0}' (expected uber, ola, or rapido)")]
pub struct ParseProviderError(String);

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "uber" => Ok(Self::Uber),
            "ola" => Ok(Self::Ola),
            "rapido" => Ok(Self::Rapido),
            _ => Err(ParseProviderError(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported gender '{0}' (expected male or female)")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(ParseGenderError(raw.to_string())),
        }
    }
}

/// A request to be placed into a pool.
///
/// Out-of-range values are tolerated here and normalized by the allocator:
/// `party_size` is clamped to `1..=4` and a partial origin falls back to the
/// default origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub college_name: String,
    pub destination: String,
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_lng: Option<f64>,
    #[serde(default = "default_party_size")]
    pub party_size: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_gender: Option<Gender>,
}

fn default_party_size() -> i32 {
    1
}

impl MatchRequest {
    pub fn new(college_name: impl Into<String>, destination: impl Into<String>, provider: Provider) -> Self {
        Self {
            college_name: college_name.into(),
            destination: destination.into(),
            provider,
            female_only: None,
            current_lat: None,
            current_lng: None,
            party_size: default_party_size(),
            owner_id: None,
            owner_name: None,
            owner_gender: None,
        }
    }

    pub fn with_party_size(self, party_size: i32) -> Self {
        Self { party_size, ..self }
    }

    pub fn with_female_only(self, female_only: bool) -> Self {
        Self {
            female_only: Some(female_only),
            ..self
        }
    }

    pub fn with_origin(self, lat: f64, lng: f64) -> Self {
        Self {
            current_lat: Some(lat),
            current_lng: Some(lng),
            ..self
        }
    }

    pub fn with_owner(
        self,
        owner_id: Option<String>,
        owner_name: Option<String>,
        owner_gender: Option<Gender>,
    ) -> Self {
        Self {
            owner_id,
            owner_name,
            owner_gender,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMember {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// A named, located point: a pickup or the meetup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStop {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl PoolStop {
    pub fn at(name: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            name: name.into(),
            lat: point.lat,
            lng: point.lng,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// A matched group sharing one provider booking.
///
/// `members` and `pickup_points` are order-correspondent: the pickup at index
/// `i` belongs to the member at index `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: String,
    pub provider: Provider,
    pub members: Vec<PoolMember>,
    pub pickup_points: Vec<PoolStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meetup_point: Option<PoolStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

impl Pool {
    pub fn rider_count(&self) -> usize {
        self.members.len()
    }

    /// The member the booking is made as.
    pub fn owner(&self) -> Option<&PoolMember> {
        let owner_id = self.owner_id.as_deref()?;
        self.members.iter().find(|member| member.id == owner_id)
    }

    pub fn pickup_for(&self, member_id: &str) -> Option<&PoolStop> {
        let idx = self.members.iter().position(|member| member.id == member_id)?;
        self.pickup_points.get(idx)
    }

    /// Copy of this pool without the given member and their pickup point.
    ///
    /// Returns `None` when `member_id` is not in the pool. Removing the owner
    /// clears `owner_id`.
    pub fn without_member(&self, member_id: &str) -> Option<Pool> {
        let idx = self.members.iter().position(|member| member.id == member_id)?;

        let members = self
            .members
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, member)| member.clone())
            .collect();
        let pickup_points = self
            .pickup_points
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, stop)| stop.clone())
            .collect();
        let owner_id = self
            .owner_id
            .clone()
            .filter(|owner_id| owner_id != member_id);

        Some(Pool {
            members,
            pickup_points,
            owner_id,
            ..self.clone()
        })
    }
}
