//! # Resource Actor
//!
//! A small runtime for building type-safe, single-writer resource stores on
//! top of the actor model. Each resource type (users, orders, drivers, ...)
//! gets its own actor that owns an in-memory collection and processes every
//! request sequentially off a Tokio mpsc channel.
//!
//! ## Why single-writer actors?
//!
//! A store that is only ever touched from one task needs no `Mutex` or
//! `RwLock`: two sequential calls against the same entity always observe a
//! strict happens-before relationship, so there are no lost updates and no
//! read skew. The actor task *is* the write queue.
//!
//! ## The three layers
//!
//! 1. **Entity layer** ([`ActorEntity`]) - your domain model and its hooks
//! 2. **Runtime layer** ([`ResourceActor`]) - the sequential event loop
//! 3. **Interface layer** ([`ResourceClient`]) - cloneable async handles
//!
//! You implement the entity trait once; the runtime provides a uniform
//! create / get / list / update / delete / action API for it.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket {
//!     id: u32,
//!     subject: String,
//!     open: bool,
//! }
//!
//! #[derive(Debug)]
//! struct TicketCreate {
//!     subject: String,
//! }
//! #[derive(Debug)]
//! struct TicketUpdate {
//!     subject: Option<String>,
//! }
//! #[derive(Debug)]
//! enum TicketAction {
//!     Close,
//! }
//! #[derive(Debug)]
//! enum TicketFilter {
//!     All,
//!     Open,
//! }
//! #[derive(Debug, thiserror::Error)]
//! #[error("ticket error")]
//! struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Update = TicketUpdate;
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Filter = TicketFilter;
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, subject: params.subject, open: true })
//!     }
//!
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//!
//!     fn matches(&self, filter: &TicketFilter) -> bool {
//!         match filter {
//!             TicketFilter::All => true,
//!             TicketFilter::Open => self.open,
//!         }
//!     }
//!
//!     async fn on_update(&mut self, update: TicketUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(subject) = update.subject {
//!             self.subject = subject;
//!         }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: TicketAction, _: &()) -> Result<(), Self::Error> {
//!         match action {
//!             TicketAction::Close => self.open = false,
//!         }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(TicketCreate { subject: "no hot water".into() }).await.unwrap();
//!     let open = client.list(TicketFilter::Open).await.unwrap();
//!     assert_eq!(open.len(), 1);
//!
//!     client.perform_action(id, TicketAction::Close).await.unwrap();
//!     let open = client.list(TicketFilter::Open).await.unwrap();
//!     assert!(open.is_empty());
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies are injected at runtime via [`ResourceActor::run`], not at
//! construction time. This late binding lets one actor hold clients for
//! other actors without circular construction: create everything first,
//! then wire the clients in when spawning the event loops.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`mock::MockClient`] with a fluent
//! expectation API, plus channel-level helpers, so client logic can be
//! tested without spawning any actor task.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
