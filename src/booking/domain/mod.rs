//! Domain model for booking lifecycle management.
//!
//! The booking domain models customer-created service requests, the status
//! state machine they move through, and the actor guards on each transition,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod actor;
mod booking;
mod details;
mod error;
mod ids;
mod status;

pub use actor::Actor;
pub use booking::{Booking, PersistedBookingData};
pub use details::{BookingDetails, FinalPrice, PreferredTime, ProblemDescription, ServiceAddress};
pub use error::{BookingDomainError, ParseBookingStatusError};
pub use ids::{BookingId, CustomerId, ServiceId};
pub use status::{BookingAction, BookingStatus};
