use crate::model::{DriverId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order sits in its lifecycle. Moves forward only:
/// `Placed -> Shipped -> Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// The transition table. Anything not listed here is rejected by the
    /// order actor.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Placed, OrderStatus::Shipped)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
        )
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Service level chosen at order time. Pricing lives in [`crate::pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryType {
    Standard,
    Express,
    SameDay,
}

impl DeliveryType {
    pub fn label(self) -> &'static str {
        match self {
            DeliveryType::Standard => "Standard Delivery",
            DeliveryType::Express => "Express Delivery",
            DeliveryType::SameDay => "Same Day Delivery",
        }
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Upi,
    Cod,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Cod => "Cash on Delivery",
        }
    }
}

/// The assigned driver, denormalized onto the order. Using one optional
/// struct instead of two optional fields makes "id set but name missing"
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRef {
    pub id: DriverId,
    pub name: String,
}

/// A delivery request moving through `Placed -> Shipped -> Delivered`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub customer_name: String,
    pub address: String,
    pub delivery_type: DeliveryType,
    pub payment_method: PaymentMethod,
    /// Fixed at creation, derived from the delivery type by the caller via
    /// the pricing table. The engine itself never recomputes it.
    pub amount: u32,
    pub status: OrderStatus,
    pub driver: Option<DriverRef>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation; always >= `created_at`.
    pub updated_at: DateTime<Utc>,
    pub proof_image_uri: Option<String>,
    pub package_details: String,
}

/// Payload for placing a new order. Status, driver, proof and timestamps
/// are all set by the engine.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: UserId,
    pub customer_name: String,
    pub address: String,
    pub delivery_type: DeliveryType,
    pub payment_method: PaymentMethod,
    pub amount: u32,
    pub package_details: String,
}

/// Role-based visibility over the order collection.
///
/// A customer sees their own orders, a driver the orders assigned to them,
/// an admin everything. There is no "unknown role" case: the vocabulary is
/// closed, so it cannot be expressed.
#[derive(Debug, Clone, Copy)]
pub enum OrderScope {
    Customer(UserId),
    Driver(DriverId),
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(OrderStatus::Placed.can_advance_to(OrderStatus::Shipped));
        assert!(OrderStatus::Shipped.can_advance_to(OrderStatus::Delivered));
    }

    #[test]
    fn everything_else_is_rejected() {
        assert!(!OrderStatus::Placed.can_advance_to(OrderStatus::Placed));
        assert!(!OrderStatus::Placed.can_advance_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Shipped.can_advance_to(OrderStatus::Placed));
        assert!(!OrderStatus::Shipped.can_advance_to(OrderStatus::Shipped));
        assert!(!OrderStatus::Delivered.can_advance_to(OrderStatus::Placed));
        assert!(!OrderStatus::Delivered.can_advance_to(OrderStatus::Shipped));
        assert!(!OrderStatus::Delivered.can_advance_to(OrderStatus::Delivered));
    }
}
