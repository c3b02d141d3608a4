//! [`ActorEntity`] implementation for [`User`].

use crate::model::{User, UserCreate, UserFilter, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_actor::ActorEntity;

/// Users have no actions; this enum is uninhabited.
#[derive(Debug)]
pub enum UserAction {}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    // Accounts are never mutated in-core.
    type Update = ();
    type Action = UserAction;
    type ActionResult = ();
    type Filter = UserFilter;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            email: params.email,
            phone: params.phone,
            password: params.password,
            name: params.name,
            role: params.role,
            address: params.address,
            vehicle_number: params.vehicle_number,
        })
    }

    fn id(&self) -> &UserId {
        &self.id
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::Identifier(identifier) => {
                self.email == *identifier || self.phone == *identifier
            }
            UserFilter::EmailOrPhone { email, phone } => {
                self.email == *email || self.phone == *phone
            }
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
