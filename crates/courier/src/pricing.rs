//! The pricing table for delivery types.
//!
//! Pricing is a caller concern: the amount is computed here, before
//! `create_order`, and stored on the order verbatim. The lifecycle engine
//! never recomputes or validates it.

use crate::model::DeliveryType;

/// Base amount (whole currency units) for a delivery type.
pub fn base_amount(delivery_type: DeliveryType) -> u32 {
    match delivery_type {
        DeliveryType::Standard => 99,
        DeliveryType::Express => 299,
        DeliveryType::SameDay => 599,
    }
}
