//! [`ActorEntity`] implementation for [`Driver`].

use crate::driver_actor::DriverError;
use crate::model::{Driver, DriverCreate, DriverFilter, DriverId};
use async_trait::async_trait;
use resource_actor::ActorEntity;

/// Drivers have no actions; this enum is uninhabited.
#[derive(Debug)]
pub enum DriverAction {}

#[async_trait]
impl ActorEntity for Driver {
    type Id = DriverId;
    // The roster is fixed after seeding.
    type Update = ();
    type Create = DriverCreate;
    type Action = DriverAction;
    type ActionResult = ();
    type Filter = DriverFilter;
    type Context = ();
    type Error = DriverError;

    fn from_create_params(id: DriverId, params: DriverCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            vehicle_number: params.vehicle_number,
        })
    }

    fn id(&self) -> &DriverId {
        &self.id
    }

    fn matches(&self, filter: &DriverFilter) -> bool {
        match filter {
            DriverFilter::All => true,
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: DriverAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
