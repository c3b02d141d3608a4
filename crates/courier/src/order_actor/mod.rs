//! # Order Actor
//!
//! The order lifecycle engine. Owns the order collection and is the only
//! writer to it; every mutation (status advance, driver assignment, proof
//! attachment) is an [`OrderAction`] handled sequentially on the actor
//! task, so each operation is all-or-nothing and `updated_at` moves under a
//! strict happens-before order.
//!
//! The actor depends on the driver roster to resolve assignments, injected
//! late as its context: [`order_actor::new`](new) builds the actor without
//! dependencies, and the orchestrator passes a
//! [`DriverClient`](crate::clients::DriverClient) to `run()`.
//!
//! Status moves through the transition table only
//! (`Placed -> Shipped -> Delivered`); anything else is rejected with
//! [`OrderError::InvalidTransition`] and leaves the order untouched.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new order actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, inner) = ResourceActor::new(32);
    (actor, OrderClient::new(inner))
}
