//! # Framework Errors
//!
//! Transport-level failures shared by all actors and clients. Entity
//! business errors travel inside [`FrameworkError::EntityError`] and can be
//! downcast back to their concrete type by resource-specific clients.

/// Errors that can occur within the actor runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
