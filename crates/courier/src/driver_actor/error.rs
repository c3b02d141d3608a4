//! Error type for the driver actor.

use thiserror::Error;

/// Errors that can occur during driver roster operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DriverError {
    /// The requested driver was not found.
    #[error("Driver not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Actor(String),
}

impl From<String> for DriverError {
    fn from(msg: String) -> Self {
        DriverError::Actor(msg)
    }
}
