//! Lifecycle actions for the order actor.

use crate::model::OrderStatus;

/// Mutations the order actor accepts beyond create/delete.
///
/// Each action refreshes `updated_at` on success and returns the updated
/// order. Note that `AttachProof` never touches the status: marking an
/// order delivered is a separate `SetStatus` call, composed by the caller.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Advance the status. Checked against the transition table.
    SetStatus(OrderStatus),
    /// Assign (or reassign) a driver. The driver is resolved through the
    /// injected roster client; the name is denormalized onto the order.
    AssignDriver(crate::model::DriverId),
    /// Attach a proof-of-delivery image reference.
    AttachProof(String),
}
