//! # Query & Aggregation Layer
//!
//! Role-scoped reads over the order collection plus the derived dashboard
//! and driver-workload numbers. Nothing here is stored: every figure is
//! computed on demand from the live collections, so it can never drift
//! from them.
//!
//! Scoping is expressed as a [`Viewer`]: the typed combination of a role
//! and the identity it sees with. The role vocabulary is closed, so the
//! "unrecognized role returns nothing" edge case of a stringly-typed API
//! cannot arise.

use crate::clients::{DriverClient, OrderClient};
use crate::driver_actor::DriverError;
use crate::model::{
    Driver, DriverId, DriverSummary, Order, OrderId, OrderScope, OrderStatus, UserId,
};
use crate::order_actor::OrderError;
use resource_actor::ActorClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who is asking. Determines which orders are visible.
#[derive(Debug, Clone, Copy)]
pub enum Viewer {
    /// A customer sees the orders they placed.
    Customer(UserId),
    /// A driver sees the orders assigned to them.
    Driver(DriverId),
    /// An admin sees everything.
    Admin,
}

impl Viewer {
    pub fn scope(self) -> OrderScope {
        match self {
            Viewer::Customer(id) => OrderScope::Customer(id),
            Viewer::Driver(id) => OrderScope::Driver(id),
            Viewer::Admin => OrderScope::All,
        }
    }
}

/// Derived per-viewer order counts. The status buckets partition the
/// scoped set: every order lands in exactly one, and they sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub placed: usize,
    pub shipped: usize,
    pub delivered: usize,
}

impl DashboardStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = Self {
            total: orders.len(),
            ..Self::default()
        };
        for order in orders {
            match order.status {
                OrderStatus::Placed => stats.placed += 1,
                OrderStatus::Shipped => stats.shipped += 1,
                OrderStatus::Delivered => stats.delivered += 1,
            }
        }
        stats
    }
}

fn summarize(driver: Driver, orders: &[Order]) -> DriverSummary {
    let mine = orders
        .iter()
        .filter(|o| o.driver.as_ref().is_some_and(|d| d.id == driver.id));
    let (mut assigned, mut completed) = (0, 0);
    for order in mine {
        if order.status == OrderStatus::Delivered {
            completed += 1;
        } else {
            assigned += 1;
        }
    }
    DriverSummary {
        driver,
        assigned_orders: assigned,
        completed_orders: completed,
    }
}

/// Read-side facade over the order and driver actors.
#[derive(Clone)]
pub struct QueryService {
    orders: OrderClient,
    drivers: DriverClient,
}

impl QueryService {
    pub fn new(orders: OrderClient, drivers: DriverClient) -> Self {
        Self { orders, drivers }
    }

    /// The orders this viewer may see, in placement order.
    #[instrument(skip(self))]
    pub async fn orders_for(&self, viewer: Viewer) -> Result<Vec<Order>, OrderError> {
        debug!("orders_for called");
        self.orders.list(viewer.scope()).await
    }

    /// A single order by id.
    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Status counts over this viewer's orders.
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self, viewer: Viewer) -> Result<DashboardStats, OrderError> {
        let orders = self.orders.list(viewer.scope()).await?;
        Ok(DashboardStats::from_orders(&orders))
    }

    /// The roster with projected workload counts.
    #[instrument(skip(self))]
    pub async fn drivers(&self) -> Result<Vec<DriverSummary>, DriverError> {
        let drivers = self.drivers.all().await?;
        let orders = self
            .orders
            .list(OrderScope::All)
            .await
            .map_err(|e| DriverError::Actor(e.to_string()))?;
        Ok(drivers
            .into_iter()
            .map(|d| summarize(d, &orders))
            .collect())
    }

    /// One driver with projected workload counts.
    #[instrument(skip(self))]
    pub async fn driver(&self, id: DriverId) -> Result<DriverSummary, DriverError> {
        let driver = self
            .drivers
            .get(id)
            .await?
            .ok_or_else(|| DriverError::NotFound(id.to_string()))?;
        let orders = self
            .orders
            .list(OrderScope::All)
            .await
            .map_err(|e| DriverError::Actor(e.to_string()))?;
        Ok(summarize(driver, &orders))
    }
}
