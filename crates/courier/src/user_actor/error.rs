//! Error type for the user actor.

use thiserror::Error;

/// Errors that can occur during user store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Actor(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::Actor(msg)
    }
}
