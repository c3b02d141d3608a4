//! Typed client wrappers around the generic resource clients.
//!
//! Each wrapper exposes the domain vocabulary (`create_order`,
//! `assign_driver`, ...) and translates transport errors back into the
//! actor's own error enum, downcasting entity errors so callers can match
//! on concrete failures such as `InvalidTransition`.

pub mod driver_client;
pub mod order_client;
pub mod user_client;

pub use driver_client::DriverClient;
pub use order_client::OrderClient;
pub use user_client::UserClient;
