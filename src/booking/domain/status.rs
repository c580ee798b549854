//! Booking lifecycle status and the explicit transition table.

use super::ParseBookingStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a booking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Booking has been created and awaits assignment and acceptance.
    Pending,
    /// The assigned technician has committed to the job.
    Accepted,
    /// Work is underway at the service address.
    InProgress,
    /// Work has finished; terminal resting state.
    Completed,
    /// The customer withdrew the request before commitment; terminal.
    Cancelled,
}

impl BookingStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Accepted,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns `true` when no further transition is permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns `true` when the status edge `self -> to` is in the transition
    /// table.
    ///
    /// The table is deliberately sparse: acceptance and cancellation only
    /// leave `Pending`, work starts only from `Accepted`, and completion only
    /// from `InProgress`. Re-applying a transition is invalid, so callers
    /// must inspect the current status rather than rely on idempotence.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Cancelled)
                | (Self::Accepted, Self::InProgress)
                | (Self::InProgress, Self::Completed)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BookingStatus {
    type Error = ParseBookingStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseBookingStatusError(value.to_owned())),
        }
    }
}

/// Actor-facing operations guarded by the booking domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingAction {
    /// Link a technician to a booking.
    Assign,
    /// Commit to an assigned booking.
    Accept,
    /// Begin work on an accepted booking.
    Start,
    /// Mark in-progress work as done.
    Complete,
    /// Withdraw a pending booking.
    Cancel,
    /// Enumerate every booking in the store.
    ListAll,
}

impl BookingAction {
    /// Returns a short verb phrase for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "assign",
            Self::Accept => "accept",
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
            Self::ListAll => "list all bookings",
        }
    }
}

impl fmt::Display for BookingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
