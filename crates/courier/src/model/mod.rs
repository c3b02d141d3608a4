//! Domain model: the plain data shapes the delivery core exchanges with its
//! callers.
//!
//! All vocabularies here are closed enums (`Role`, `OrderStatus`,
//! `DeliveryType`, `PaymentMethod`); an out-of-vocabulary value cannot be
//! constructed. Everything derives `serde` because these types are the
//! call/response contract of the core.

pub mod driver;
pub mod order;
pub mod session;
pub mod user;

pub use driver::{Driver, DriverCreate, DriverFilter, DriverId, DriverSummary};
pub use order::{
    DeliveryType, DriverRef, Order, OrderCreate, OrderId, OrderScope, OrderStatus, PaymentMethod,
};
pub use session::Session;
pub use user::{Role, User, UserCreate, UserFilter, UserId, UserProfile};
