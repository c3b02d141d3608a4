//! # Session Facade
//!
//! Login, signup, OTP verification and password-reset acknowledgment
//! against the user store. Every success hands back a [`Session`]: the
//! sanitized account plus an opaque, non-authoritative token (see
//! [`Session`] for what that token is not).
//!
//! Identifier lookups accept an email OR a phone number, matched exactly;
//! passwords are compared exactly. The OTP check is stateless and accepts
//! the single demo code — it is a flow placeholder, not a one-time-password
//! protocol.

pub mod error;

pub use error::AuthError;

use crate::clients::UserClient;
use crate::model::{Role, Session, UserCreate, UserFilter};
use tracing::{debug, info, instrument};

/// The only OTP code the demo verifier accepts.
pub const DEMO_OTP: &str = "1234";

/// Acknowledgment returned by a successful password-reset request.
pub const PASSWORD_RESET_ACK: &str = "Password reset link sent to your email";

/// Payload for opening a new account.
///
/// `role` defaults to [`Role::Customer`] and `address` to empty when not
/// given.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub email: String,
    pub phone: String,
    pub password: String,
    pub name: String,
    pub role: Option<Role>,
    pub address: Option<String>,
    pub vehicle_number: Option<String>,
}

/// Authentication facade over the user actor.
#[derive(Clone)]
pub struct SessionService {
    users: UserClient,
}

impl SessionService {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// Authenticate by email or phone plus password.
    #[instrument(skip(self, password))]
    pub async fn login(&self, identifier: &str, password: &str) -> Result<Session, AuthError> {
        debug!("login called");
        let candidates = self
            .users
            .find(UserFilter::Identifier(identifier.to_string()))
            .await?;

        let user = candidates
            .into_iter()
            .find(|u| u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        info!(user_id = %user.id, role = %user.role, "Login ok");
        Ok(Session::for_profile(user.profile()))
    }

    /// Open a new account and return its first session.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> Result<Session, AuthError> {
        debug!("signup called");
        let taken = self
            .users
            .find(UserFilter::EmailOrPhone {
                email: request.email.clone(),
                phone: request.phone.clone(),
            })
            .await?;
        if !taken.is_empty() {
            return Err(AuthError::UserAlreadyExists);
        }

        let role = request.role.unwrap_or(Role::Customer);
        let address = request.address.unwrap_or_default();
        let id = self
            .users
            .create_user(UserCreate {
                email: request.email.clone(),
                phone: request.phone.clone(),
                password: request.password,
                name: request.name.clone(),
                role,
                address: address.clone(),
                vehicle_number: request.vehicle_number.clone(),
            })
            .await?;

        info!(user_id = %id, %role, "Signup ok");
        Ok(Session::for_profile(crate::model::UserProfile {
            id,
            email: request.email,
            phone: request.phone,
            name: request.name,
            role,
            address,
            vehicle_number: request.vehicle_number,
        }))
    }

    /// Verify a one-time code. Stateless: not tied to any session or phone
    /// number.
    #[instrument(skip(self, code))]
    pub async fn verify_otp(&self, code: &str) -> Result<(), AuthError> {
        if code == DEMO_OTP {
            Ok(())
        } else {
            Err(AuthError::InvalidOtp)
        }
    }

    /// Acknowledge a password-reset request. No reset actually happens and
    /// no token is issued; the caller only learns whether the account
    /// exists.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, identifier: &str) -> Result<String, AuthError> {
        let candidates = self
            .users
            .find(UserFilter::Identifier(identifier.to_string()))
            .await?;
        if candidates.is_empty() {
            return Err(AuthError::UserNotFound);
        }
        Ok(PASSWORD_RESET_ACK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{User, UserId};
    use resource_actor::mock::MockClient;

    fn stored_user(id: u32, email: &str, phone: &str, password: &str, role: Role) -> User {
        User {
            id: UserId(id),
            email: email.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
            name: "Test User".to_string(),
            role,
            address: String::new(),
            vehicle_number: None,
        }
    }

    #[tokio::test]
    async fn login_strips_password_and_issues_token() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![stored_user(
            1,
            "admin@test.com",
            "9000000001",
            "password123",
            Role::Admin,
        )]);

        let service = SessionService::new(UserClient::new(mock.client()));
        let session = service.login("admin@test.com", "password123").await.unwrap();

        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(session.user.email, "admin@test.com");
        assert_eq!(session.token, "session-user_1");
        // UserProfile has no password field; serialize to prove nothing
        // password-shaped leaks through the contract.
        let json = serde_json::to_string(&session.user).unwrap();
        assert!(!json.contains("password"));
        mock.verify();
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_invalid_credentials() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![stored_user(
            1,
            "admin@test.com",
            "9000000001",
            "password123",
            Role::Admin,
        )]);

        let service = SessionService::new(UserClient::new(mock.client()));
        let result = service.login("admin@test.com", "nope").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_with_unknown_identifier_is_invalid_credentials() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![]);

        let service = SessionService::new(UserClient::new(mock.client()));
        let result = service.login("ghost@test.com", "password123").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn signup_rejects_taken_contact_points() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![stored_user(
            1,
            "taken@test.com",
            "9000000001",
            "password123",
            Role::Customer,
        )]);

        let service = SessionService::new(UserClient::new(mock.client()));
        let result = service
            .signup(SignupRequest {
                email: "taken@test.com".into(),
                phone: "9111111111".into(),
                password: "hunter22".into(),
                name: "Dup".into(),
                role: None,
                address: None,
                vehicle_number: None,
            })
            .await;
        assert_eq!(result, Err(AuthError::UserAlreadyExists));
        mock.verify();
    }

    #[tokio::test]
    async fn signup_defaults_role_to_customer() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![]);
        mock.expect_create().return_ok(UserId(5));

        let service = SessionService::new(UserClient::new(mock.client()));
        let session = service
            .signup(SignupRequest {
                email: "new@test.com".into(),
                phone: "9222222222".into(),
                password: "hunter22".into(),
                name: "Newcomer".into(),
                role: None,
                address: None,
                vehicle_number: None,
            })
            .await
            .unwrap();

        assert_eq!(session.user.id, UserId(5));
        assert_eq!(session.user.role, Role::Customer);
        assert_eq!(session.user.address, "");
        mock.verify();
    }

    #[tokio::test]
    async fn otp_accepts_only_the_demo_code() {
        let mock = MockClient::<User>::new();
        let service = SessionService::new(UserClient::new(mock.client()));

        assert!(service.verify_otp("1234").await.is_ok());
        assert_eq!(service.verify_otp("0000").await, Err(AuthError::InvalidOtp));
        assert_eq!(service.verify_otp("").await, Err(AuthError::InvalidOtp));
    }

    #[tokio::test]
    async fn forgot_password_acknowledges_known_accounts_only() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![stored_user(
            1,
            "admin@test.com",
            "9000000001",
            "password123",
            Role::Admin,
        )]);
        mock.expect_list().return_ok(vec![]);

        let service = SessionService::new(UserClient::new(mock.client()));

        let ack = service.forgot_password("admin@test.com").await.unwrap();
        assert_eq!(ack, PASSWORD_RESET_ACK);

        let missing = service.forgot_password("ghost@test.com").await;
        assert_eq!(missing, Err(AuthError::UserNotFound));
        mock.verify();
    }
}
