//! Service layer for administrative technician assignment.
//!
//! Assignment is the administrator's act of linking a technician to a
//! booking; it is distinct from the technician's own acceptance, which is a
//! lifecycle transition. Keeping the two apart lets an administrator correct
//! a bad match before the technician has committed, while in-flight or
//! finished work stays untouchable.

use crate::booking::{
    domain::{Actor, Booking, BookingAction, BookingDomainError, BookingId},
    ports::{BookingRepository, BookingRepositoryError},
};
use crate::technician::{
    domain::TechnicianId,
    ports::{TechnicianRepository, TechnicianRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for assignment operations.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// Domain guard failed.
    #[error(transparent)]
    Domain(#[from] BookingDomainError),
    /// Booking store operation failed.
    #[error(transparent)]
    Repository(#[from] BookingRepositoryError),
    /// Technician registry operation failed.
    #[error(transparent)]
    TechnicianRepository(#[from] TechnicianRepositoryError),
}

/// Result type for assignment service operations.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// Technician assignment orchestration service.
#[derive(Clone)]
pub struct AssignmentService<B, T, C>
where
    B: BookingRepository,
    T: TechnicianRepository,
    C: Clock + Send + Sync,
{
    bookings: Arc<B>,
    technicians: Arc<T>,
    clock: Arc<C>,
}

impl<B, T, C> AssignmentService<B, T, C>
where
    B: BookingRepository,
    T: TechnicianRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new assignment service.
    #[must_use]
    pub const fn new(bookings: Arc<B>, technicians: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            bookings,
            technicians,
            clock,
        }
    }

    /// Links a technician to a booking, replacing any existing link.
    ///
    /// Assignment never advances the lifecycle; the technician still accepts
    /// separately. Reassigning an accepted booking reverts it to pending so
    /// the incoming technician must accept for themselves.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::AdminRequired`] for non-administrators,
    /// a not-found error when either id does not resolve, or
    /// [`BookingDomainError::AssignmentWindowClosed`] once work has started
    /// or the booking has reached a terminal status.
    pub async fn assign_technician(
        &self,
        booking_id: BookingId,
        technician_id: TechnicianId,
        actor: Actor,
    ) -> AssignmentResult<Booking> {
        if !actor.is_admin() {
            return Err(BookingDomainError::AdminRequired(BookingAction::Assign).into());
        }

        let technician = self
            .technicians
            .find_by_id(technician_id)
            .await?
            .ok_or(TechnicianRepositoryError::NotFound(technician_id))?;
        let mut booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingRepositoryError::NotFound(booking_id))?;

        let displaced = booking.technician_id();
        booking.assign(technician.id(), &*self.clock)?;
        self.bookings.update(&booking).await?;

        match displaced {
            Some(previous) if previous != technician_id => {
                tracing::info!(
                    booking_id = %booking_id,
                    previous_technician = %previous,
                    technician_id = %technician_id,
                    "Booking reassigned"
                );
            }
            _ => {
                tracing::info!(
                    booking_id = %booking_id,
                    technician_id = %technician_id,
                    "Technician assigned"
                );
            }
        }
        Ok(booking)
    }
}
