//! Actor identity resolved by the surrounding layer.

use super::CustomerId;
use crate::technician::domain::TechnicianId;

/// Identity and role of the party invoking a guarded operation.
///
/// The surrounding presentation/API layer resolves credentials to an `Actor`
/// and passes it into the core; the domain guards compare it against record
/// ownership and assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// A customer acting on their own bookings.
    Customer(CustomerId),
    /// A technician acting on bookings assigned to them.
    Technician(TechnicianId),
    /// An administrator with allocation capability.
    Admin,
}

impl Actor {
    /// Returns `true` when the actor holds administrative capability.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
