//! # Courier Core
//!
//! The in-memory domain core of a small parcel-delivery service: accounts,
//! a driver roster, and the order lifecycle, each owned by a dedicated
//! actor built on [`resource_actor`].
//!
//! Three collections, three actors:
//!
//! - **Users** ([`user_actor`]) — accounts with credentials and a role
//!   (customer, driver, admin).
//! - **Drivers** ([`driver_actor`]) — the delivery roster. Workload
//!   counts are never stored on a driver; they are projected from orders
//!   at read time.
//! - **Orders** ([`order_actor`]) — the lifecycle engine. Status moves
//!   through a closed transition table (`Placed → Shipped → Delivered`);
//!   anything else is rejected without mutating the order.
//!
//! Over the actors sit two facades: [`session::SessionService`] for
//! login/signup/OTP/password-reset flows and [`query::QueryService`] for
//! role-scoped reads and derived dashboard numbers. [`lifecycle`] wires
//! everything into a running [`lifecycle::CourierSystem`].
//!
//! Because every collection lives behind a single actor task, mutations
//! are applied one at a time in arrival order; there is no locking
//! anywhere in this crate.

pub mod clients;
pub mod driver_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod query;
pub mod seed;
pub mod session;
pub mod user_actor;
pub mod validate;
