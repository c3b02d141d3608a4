//! # Driver Actor
//!
//! Owns the driver roster. Drivers are seeded at bootstrap through the
//! normal create path and are read-only afterwards; workload counters are
//! deliberately NOT stored here — they are projected from the order
//! collection by the query layer, so they cannot drift.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DriverClient;
use crate::model::Driver;
use resource_actor::ResourceActor;

/// Creates a new driver actor and its client.
pub fn new() -> (ResourceActor<Driver>, DriverClient) {
    let (actor, inner) = ResourceActor::new(32);
    (actor, DriverClient::new(inner))
}
