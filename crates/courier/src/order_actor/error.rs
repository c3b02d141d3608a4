//! Error type for the order actor.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The driver named in an assignment does not exist.
    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    /// The requested status move is not in the transition table.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Actor(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Actor(msg)
    }
}
