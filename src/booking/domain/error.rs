//! Error types for booking domain validation and guard checks.

use super::{BookingAction, BookingId, BookingStatus};
use thiserror::Error;

/// Errors returned by booking domain guards and value construction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingDomainError {
    /// The requested status edge is not in the transition table.
    #[error("invalid status transition from {from} to {to} for booking {booking_id}")]
    InvalidTransition {
        /// Booking the transition was requested against.
        booking_id: BookingId,
        /// Status the booking currently holds.
        from: BookingStatus,
        /// Status the caller requested.
        to: BookingStatus,
    },

    /// The operation requires an assigned technician but none is set.
    #[error("booking {0} has no assigned technician")]
    NotAssigned(BookingId),

    /// The acting technician is not the one assigned to the booking.
    #[error("only the assigned technician may {action} booking {booking_id}")]
    NotAssignedTechnician {
        /// Booking the actor attempted to mutate.
        booking_id: BookingId,
        /// Operation the actor attempted.
        action: BookingAction,
    },

    /// The acting customer does not own the booking.
    #[error("only the owning customer may cancel booking {0}")]
    NotOwningCustomer(BookingId),

    /// The operation requires administrative capability.
    #[error("administrative capability required to {0}")]
    AdminRequired(BookingAction),

    /// The actor may not read the booking.
    #[error("actor may not view booking {0}")]
    NotVisible(BookingId),

    /// Assignment or reassignment attempted outside the permitted window.
    #[error("assignment window closed for booking {booking_id} in status {status}")]
    AssignmentWindowClosed {
        /// Booking the assignment targeted.
        booking_id: BookingId,
        /// Status that closed the window.
        status: BookingStatus,
    },

    /// The problem description is empty after trimming.
    #[error("problem description must not be empty")]
    EmptyProblemDescription,

    /// The service address is empty after trimming.
    #[error("service address must not be empty")]
    EmptyAddress,

    /// The preferred time slot is empty after trimming.
    #[error("preferred time must not be empty")]
    EmptyPreferredTime,

    /// The final price is negative or not a finite number.
    #[error("final price {0} must be a non-negative amount")]
    InvalidFinalPrice(f64),

    /// A final price was supplied on a transition other than completion.
    #[error("final price may only be set when completing a booking")]
    FinalPriceOutsideCompletion,
}

/// Error returned while parsing booking statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown booking status: {0}")]
pub struct ParseBookingStatusError(pub String);
