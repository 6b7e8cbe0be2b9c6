//! Fixed candidate names for riders synthesized into a pool.

use rand::Rng;

use crate::model::Gender;

pub const FEMALE_NAMES: [&str; 8] = [
    "Aisha", "Sneha", "Priya", "Zoya", "Mira", "Ananya", "Kriti", "Sanya",
];

pub const MALE_NAMES: [&str; 8] = [
    "Arjun", "Rohan", "Kabir", "Vikram", "Rahul", "Dev", "Varun", "Ishaan",
];

pub fn names_for(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Female => &FEMALE_NAMES,
        Gender::Male => &MALE_NAMES,
    }
}

/// Name at position `index`, cycling through the list. Names repeat once the
/// list is exhausted.
pub fn name_at(gender: Gender, index: usize) -> &'static str {
    let names = names_for(gender);
    names[index % names.len()]
}

/// Gender for the next synthesized rider: always female under a female-only
/// restriction, otherwise a fair coin.
pub fn sample_gender<R: Rng + ?Sized>(female_only: bool, rng: &mut R) -> Gender {
    if female_only || rng.gen_bool(0.5) {
        Gender::Female
    } else {
        Gender::Male
    }
}
