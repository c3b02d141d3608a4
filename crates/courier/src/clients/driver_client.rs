//! # Driver Client
//!
//! High-level handle for the driver roster. Also the context the order
//! actor uses to resolve assignments.

use crate::driver_actor::DriverError;
use crate::model::{Driver, DriverCreate, DriverFilter, DriverId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the driver actor.
#[derive(Clone)]
pub struct DriverClient {
    inner: ResourceClient<Driver>,
}

impl DriverClient {
    pub fn new(inner: ResourceClient<Driver>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn register_driver(&self, params: DriverCreate) -> Result<DriverId, DriverError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The full roster, in registration order.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<Driver>, DriverError> {
        debug!("Sending request");
        self.inner
            .list(DriverFilter::All)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Driver> for DriverClient {
    type Error = DriverError;

    fn inner(&self) -> &ResourceClient<Driver> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => DriverError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<DriverError>() {
                Ok(err) => *err,
                Err(other) => DriverError::Actor(other.to_string()),
            },
            other => DriverError::Actor(other.to_string()),
        }
    }
}
