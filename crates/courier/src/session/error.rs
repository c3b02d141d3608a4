//! Error type for the session facade.

use crate::user_actor::UserError;
use thiserror::Error;

/// Authentication and account failures. All terminal, none retryable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// No account matches the identifier/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An account with this email or phone already exists.
    #[error("User already exists")]
    UserAlreadyExists,

    /// The one-time code is wrong.
    #[error("Invalid OTP")]
    InvalidOtp,

    /// No account matches the identifier.
    #[error("User not found")]
    UserNotFound,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Actor(String),
}

impl From<UserError> for AuthError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => AuthError::UserNotFound,
            UserError::Actor(msg) => AuthError::Actor(msg),
        }
    }
}
