//! Local user identity. There is no verification: a user is whoever they say
//! they are, with a freshly generated id.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ids::{new_id, IdKind};
use crate::model::{Gender, MatchRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Passenger,
    Driver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub gender: Gender,
}

impl AppUser {
    pub fn sign_in<R: Rng + ?Sized>(
        role: UserRole,
        name: &str,
        email: &str,
        gender: Gender,
        rng: &mut R,
    ) -> Self {
        Self {
            id: new_id(IdKind::User, rng),
            role,
            name: non_blank(name),
            email: non_blank(email),
            gender,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl MatchRequest {
    /// Copy of this request booked as `user`.
    pub fn owned_by(self, user: &AppUser) -> Self {
        self.with_owner(Some(user.id.clone()), user.name.clone(), Some(user.gender))
    }
}
