//! # System Lifecycle & Orchestration
//!
//! Wiring the three actors into one running system. Individual actors are
//! simple; this module is the conductor that creates them, injects their
//! dependencies, and coordinates a clean shutdown.
//!
//! The pattern:
//!
//! 1. **Create** all actors and clients with no dependencies.
//! 2. **Wire** dependencies when spawning: the order actor receives the
//!    driver client as its context (late binding avoids circular
//!    construction).
//! 3. **Shutdown** by dropping every client handle; each actor drains its
//!    channel and exits, and the join handles are awaited.
//!
//! Context clones held by actors (the order actor's driver client) do not
//! block shutdown: the dependency graph is acyclic, so each actor's
//! channel closes once its own upstream handles are gone.

pub mod system;

pub use resource_actor::tracing::setup_tracing;
pub use system::CourierSystem;
