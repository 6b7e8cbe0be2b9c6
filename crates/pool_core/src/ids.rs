//! Short opaque identifiers for users, pools and ride requests.
//!
//! Identifiers are a one-letter kind prefix followed by eight lowercase
//! base-36 characters (e.g. `P-k3f9a0zq`). They carry no meaning beyond
//! uniqueness within the scope that generated them.

use std::collections::HashSet;

use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters after the prefix.
pub const TOKEN_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    User,
    Pool,
    Request,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::User => "U",
            Self::Pool => "P",
            Self::Request => "R",
        }
    }
}

/// Random base-36 token of [`TOKEN_LEN`] characters.
pub fn random_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

pub fn new_id<R: Rng + ?Sized>(kind: IdKind, rng: &mut R) -> String {
    format!("{}-{}", kind.prefix(), random_token(rng))
}

/// Generate an id that is not yet in `taken` and record it there.
pub fn unique_id<R: Rng + ?Sized>(kind: IdKind, rng: &mut R, taken: &mut HashSet<String>) -> String {
    loop {
        let candidate = new_id(kind, rng);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ids_carry_prefix_and_base36_token() {
        let mut rng = StdRng::seed_from_u64(3);
        let id = new_id(IdKind::Pool, &mut rng);

        let (prefix, token) = id.split_once('-').expect("prefix separator");
        assert_eq!(prefix, "P");
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn same_seed_yields_same_ids() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        assert_eq!(new_id(IdKind::User, &mut a), new_id(IdKind::User, &mut b));
    }

    #[test]
    fn unique_id_skips_taken_values() {
        let mut probe = StdRng::seed_from_u64(5);
        let first = new_id(IdKind::User, &mut probe);

        let mut rng = StdRng::seed_from_u64(5);
        let mut taken = HashSet::from([first.clone()]);
        let id = unique_id(IdKind::User, &mut rng, &mut taken);

        assert_ne!(id, first);
        assert!(taken.contains(&id));
    }
}
