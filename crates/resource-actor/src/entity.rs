//! # ActorEntity Trait
//!
//! The contract every resource type must satisfy to be managed by a
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the
//! payloads for each operation, so a user-create payload can never be sent
//! to an order actor; the compiler rules that class of bug out entirely.
//!
//! Lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`)
//! run inside the actor task with the injected [`Context`](ActorEntity::Context),
//! which is how an entity reaches other actors (late binding: the context is
//! passed to `run()`, not to the constructor).
//!
//! `on_create` and `on_delete` are provided methods; the default does
//! nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// `ResourceActor`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// Must be convertible from `u32` for automatic ID generation, and
    /// `Ord` so that listings can be returned in allocation order (IDs are
    /// handed out monotonically, so ascending ID order is insertion order).
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of resource-specific operations beyond plain CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The predicate payload accepted by `list`.
    ///
    /// The actor evaluates the predicate via [`matches`](ActorEntity::matches)
    /// inside its own task, so scans stay on the single writer and observe a
    /// consistent snapshot of the store.
    type Filter: Send + Sync + Debug;

    /// The runtime dependencies injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor, covering all its operations. Clients get a
    /// single error type to match on instead of one enum per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the generated ID and the payload.
    /// Called synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this entity satisfies the given filter.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle hooks ---

    /// Called after the entity is constructed, before it is inserted.
    /// Failing here aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. The entity mutates its
    /// own state; failing leaves the stored entity untouched only if the
    /// implementation errors out before mutating.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. Failing here aborts
    /// the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
