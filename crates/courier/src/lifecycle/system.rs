use crate::clients::{DriverClient, OrderClient, UserClient};
use crate::query::QueryService;
use crate::seed::{self, SeedData, SeedError};
use crate::session::SessionService;
use crate::{driver_actor, order_actor, user_actor};
use tracing::{error, info};

/// The running delivery core: three actors plus the facades over them.
///
/// Construction spawns every actor; the struct holds the service handles a
/// caller needs ([`SessionService`], [`QueryService`], the raw clients)
/// and the join handles for shutdown.
pub struct CourierSystem {
    /// Login / signup / OTP / password-reset facade.
    pub session: SessionService,
    /// Role-scoped reads and aggregation.
    pub query: QueryService,
    /// Direct handle to the user store.
    pub users: UserClient,
    /// Direct handle to the driver roster.
    pub drivers: DriverClient,
    /// Direct handle to the order lifecycle engine.
    pub orders: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CourierSystem {
    /// Creates the system with all actors running and empty collections.
    pub fn new() -> Self {
        // 1. Create actors (no dependencies yet)
        let (user_actor, users) = user_actor::new();
        let (driver_actor, drivers) = driver_actor::new();
        let (order_actor, orders) = order_actor::new();

        // 2. Spawn with injected context. Only the order actor has a
        // dependency: the roster, for resolving assignments.
        let user_handle = tokio::spawn(user_actor.run(()));
        let driver_handle = tokio::spawn(driver_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(drivers.clone()));

        Self {
            session: SessionService::new(users.clone()),
            query: QueryService::new(orders.clone(), drivers.clone()),
            users,
            drivers,
            orders,
            handles: vec![user_handle, driver_handle, order_handle],
        }
    }

    /// Creates the system and loads the demo fixtures (seed accounts and
    /// the driver roster).
    pub async fn with_seed_data() -> Result<(Self, SeedData), SeedError> {
        let system = Self::new();
        let data = seed::load(&system).await?;
        info!(
            drivers = data.drivers.len(),
            "Seed data loaded"
        );
        Ok((system, data))
    }

    /// Gracefully shuts the system down: drops every client handle so the
    /// actors drain and exit, then awaits their tasks.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the handles closes the channels; each actor's recv()
        // then returns None and its loop ends. The order actor's context
        // clone of the driver client goes away when that task ends, which
        // in turn releases the driver actor.
        drop(self.session);
        drop(self.query);
        drop(self.users);
        drop(self.drivers);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CourierSystem {
    fn default() -> Self {
        Self::new()
    }
}
