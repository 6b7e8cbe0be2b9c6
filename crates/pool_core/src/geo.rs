//! Coordinates, origin resolution and pickup jitter.
//!
//! Pickup points are fabricated: each one is an independent uniform offset
//! around the trip origin, with no collision avoidance. Validation and
//! great-circle distance go through `h3o::LatLng`.

use h3o::LatLng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default trip origin (Powai, Mumbai) used when the caller supplies no location.
pub const DEFAULT_ORIGIN_LAT: f64 = 19.1334;
pub const DEFAULT_ORIGIN_LNG: f64 = 72.9133;

/// Full width (degrees) of the square pickup points are scattered in.
pub const DEFAULT_PICKUP_SPREAD_DEG: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn default_origin() -> Self {
        Self::new(DEFAULT_ORIGIN_LAT, DEFAULT_ORIGIN_LNG)
    }

    /// Validated H3 coordinate, `None` for non-finite values.
    pub fn to_lat_lng(self) -> Option<LatLng> {
        LatLng::new(self.lat, self.lng).ok()
    }

    /// Great-circle distance in kilometres, `None` if either point is invalid.
    pub fn distance_km(self, other: GeoPoint) -> Option<f64> {
        Some(self.to_lat_lng()?.distance_km(other.to_lat_lng()?))
    }
}

/// Pick the trip origin: the caller's position when both coordinates are
/// present and valid, otherwise `fallback`.
pub fn resolve_origin(lat: Option<f64>, lng: Option<f64>, fallback: GeoPoint) -> GeoPoint {
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            let candidate = GeoPoint::new(lat, lng);
            if candidate.to_lat_lng().is_some() {
                candidate
            } else {
                fallback
            }
        }
        _ => fallback,
    }
}

/// `base + (u - 0.5) * spread` for a uniform `u` in `[0, 1)`.
pub fn rand_around<R: Rng + ?Sized>(base: f64, spread: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.gen();
    base + (u - 0.5) * spread
}

/// Random point within `spread / 2` degrees of `base` on each axis.
pub fn jitter_around<R: Rng + ?Sized>(base: GeoPoint, spread: f64, rng: &mut R) -> GeoPoint {
    let lat = rand_around(base.lat, spread, rng);
    let lng = rand_around(base.lng, spread, rng);
    GeoPoint::new(lat, lng)
}

/// Round a distance to two decimals (ten metres).
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
