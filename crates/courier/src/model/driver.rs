use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DriverId(pub u32);

impl From<u32> for DriverId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "driver_{}", self.0)
    }
}

/// A delivery driver. Seeded at bootstrap and read-only afterwards.
///
/// Note what is absent: no assigned/completed counters. Those are computed
/// from the order collection (see [`DriverSummary`]), so they can never
/// drift from the orders themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_number: String,
}

/// Payload for registering a driver.
#[derive(Debug, Clone)]
pub struct DriverCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_number: String,
}

/// Predicates the driver actor can evaluate over its store.
#[derive(Debug, Clone)]
pub enum DriverFilter {
    All,
}

/// A driver together with workload counts projected from the order
/// collection: `assigned_orders` counts this driver's not-yet-delivered
/// orders, `completed_orders` the delivered ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSummary {
    pub driver: Driver,
    pub assigned_orders: usize,
    pub completed_orders: usize,
}
