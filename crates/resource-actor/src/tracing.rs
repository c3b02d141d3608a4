//! # Observability
//!
//! One-call tracing setup for binaries and demos built on the runtime.
//!
//! The subscriber reads its filter from `RUST_LOG`, hides module targets
//! (actors already log a structured `entity_type` field) and uses the
//! compact formatter so span hierarchy stays inline:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle events
//! RUST_LOG=debug cargo run    # full request payloads
//! ```
//!
//! Each actor logs its startup, every operation with the entity ID and
//! store size, and its shutdown with the final entity count.

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
