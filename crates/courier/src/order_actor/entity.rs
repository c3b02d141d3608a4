//! [`ActorEntity`] implementation for [`Order`].

use crate::clients::DriverClient;
use crate::model::{DriverRef, Order, OrderCreate, OrderId, OrderScope};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    // All mutations are actions; there is no free-form update.
    type Update = ();
    type Action = OrderAction;
    /// Every action returns the updated order.
    type ActionResult = Order;
    type Filter = OrderScope;
    /// Driver assignments are resolved against the roster.
    type Context = DriverClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            customer_id: params.customer_id,
            customer_name: params.customer_name,
            address: params.address,
            delivery_type: params.delivery_type,
            payment_method: params.payment_method,
            amount: params.amount,
            status: crate::model::OrderStatus::Placed,
            driver: None,
            created_at: now,
            updated_at: now,
            proof_image_uri: None,
            package_details: params.package_details,
        })
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn matches(&self, scope: &OrderScope) -> bool {
        match scope {
            OrderScope::Customer(customer_id) => self.customer_id == *customer_id,
            OrderScope::Driver(driver_id) => {
                self.driver.as_ref().is_some_and(|d| d.id == *driver_id)
            }
            OrderScope::All => true,
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &DriverClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &DriverClient,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::SetStatus(next) => {
                if !self.status.can_advance_to(next) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                self.status = next;
            }
            OrderAction::AssignDriver(driver_id) => {
                // Resolve first; a missing driver must leave the order
                // unmutated.
                let driver = ctx
                    .get(driver_id)
                    .await
                    .map_err(|e| OrderError::Actor(e.to_string()))?
                    .ok_or_else(|| OrderError::DriverNotFound(driver_id.to_string()))?;
                self.driver = Some(DriverRef {
                    id: driver.id,
                    name: driver.name,
                });
            }
            OrderAction::AttachProof(image_uri) => {
                self.proof_image_uri = Some(image_uri);
            }
        }
        self.updated_at = Utc::now();
        Ok(self.clone())
    }
}
