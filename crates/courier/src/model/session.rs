use crate::model::UserProfile;
use serde::{Deserialize, Serialize};

/// The result of a successful login or signup: the sanitized account plus
/// an opaque handle the UI can keep for the lifetime of the session.
///
/// The token is NOT a credential. It is derived deterministically from the
/// user id and carries no signature; the core has no server-side revocation,
/// logout is purely a client-side discard. Anything needing a real
/// authentication guarantee must layer a signed or random token on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

impl Session {
    pub fn for_profile(user: UserProfile) -> Self {
        let token = format!("session-{}", user.id);
        Self { user, token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, UserId};

    #[test]
    fn token_is_deterministic_per_user() {
        let profile = UserProfile {
            id: UserId(7),
            email: "a@test.com".into(),
            phone: "9000000000".into(),
            name: "A".into(),
            role: Role::Customer,
            address: String::new(),
            vehicle_number: None,
        };
        let a = Session::for_profile(profile.clone());
        let b = Session::for_profile(profile);
        assert_eq!(a.token, b.token);
        assert_eq!(a.token, "session-user_7");
    }
}
