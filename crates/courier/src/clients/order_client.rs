//! # Order Client
//!
//! High-level handle for the order lifecycle engine. Each method maps to
//! one engine operation; transition checking and driver resolution happen
//! inside the actor, so a failed call leaves the order exactly as it was.

use crate::model::{DriverId, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(customer = %params.customer_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Advance an order through the status table.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(Self::map_error)
    }

    /// Assign (or reassign) a driver. Idempotent per driver, apart from the
    /// refreshed `updated_at`.
    #[instrument(skip(self))]
    pub async fn assign_driver(&self, id: OrderId, driver: DriverId) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::AssignDriver(driver))
            .await
            .map_err(Self::map_error)
    }

    /// Attach a proof-of-delivery image reference. Leaves status untouched.
    #[instrument(skip(self))]
    pub async fn attach_proof(&self, id: OrderId, image_uri: String) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::AttachProof(image_uri))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::Actor(other.to_string()),
            },
            other => OrderError::Actor(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn update_status_sends_set_status_action() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .update_status(OrderId(1), OrderStatus::Shipped)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(1));
        match &action {
            OrderAction::SetStatus(status) => assert_eq!(*status, OrderStatus::Shipped),
            other => panic!("Expected SetStatus action, got {other:?}"),
        }

        // Answer with an EntityError so we exercise the downcast path.
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderError::InvalidTransition {
                    from: OrderStatus::Delivered,
                    to: OrderStatus::Shipped,
                },
            ))))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(
            result,
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Shipped,
            })
        );
    }

    #[tokio::test]
    async fn assign_driver_sends_assign_action() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task =
            tokio::spawn(async move { order_client.assign_driver(OrderId(4), DriverId(2)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(4));
        match action {
            OrderAction::AssignDriver(driver) => assert_eq!(driver, DriverId(2)),
            other => panic!("Expected AssignDriver action, got {other:?}"),
        }

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderError::DriverNotFound(DriverId(2).to_string()),
            ))))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(OrderError::DriverNotFound("driver_2".into())));
    }

    #[tokio::test]
    async fn missing_order_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .attach_proof(OrderId(9), "file:///proof.jpg".into())
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::NotFound(OrderId(9).to_string())))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(OrderError::NotFound("order_9".into())));
    }
}
