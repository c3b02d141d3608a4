//! # User Actor
//!
//! Owns the account collection. The simplest actor in the system: accounts
//! are created once (signup) and read back (login, uniqueness probes,
//! password-reset lookups); the core has no profile editing and no account
//! deletion, so the update and delete paths are intentionally inert.
//!
//! Lookups by identifier go through [`UserFilter`](crate::model::UserFilter)
//! so the scan runs inside the actor task, on a consistent snapshot.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new user actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, inner) = ResourceActor::new(32);
    (actor, UserClient::new(inner))
}
