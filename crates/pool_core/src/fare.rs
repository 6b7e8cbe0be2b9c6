//! Even fare splitting across a pool.

use serde::{Deserialize, Serialize};

use crate::model::Pool;

/// One rider's slice of the booking fare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareShare {
    pub name: String,
    pub value: f64,
}

/// Even per-student share. A student count of zero is treated as one.
pub fn per_student_share(total_fare: f64, student_count: u32) -> f64 {
    total_fare / f64::from(student_count.max(1))
}

/// What a single student saves by pooling instead of paying the whole fare.
pub fn group_savings(total_fare: f64, student_count: u32) -> f64 {
    total_fare - per_student_share(total_fare, student_count)
}

/// Round to two decimals (paise).
pub fn round_to_paise(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn fare_split(pool: &Pool, total_fare: f64) -> Vec<FareShare> {
    let share = per_student_share(total_fare, pool.rider_count() as u32);
    pool.members
        .iter()
        .map(|member| FareShare {
            name: member.name.clone(),
            value: share,
        })
        .collect()
}
