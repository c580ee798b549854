//! Repository port for booking persistence, lookup, and listing.

use crate::booking::domain::{Booking, BookingId, CustomerId};
use crate::technician::domain::TechnicianId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for booking repository operations.
pub type BookingRepositoryResult<T> = Result<T, BookingRepositoryError>;

/// Booking persistence contract.
///
/// Listing methods return whole-record snapshots sorted by booking id, so
/// repeated calls over an unchanged store yield identical sequences.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Stores a new booking.
    ///
    /// # Errors
    ///
    /// Returns [`BookingRepositoryError::DuplicateBooking`] when the booking
    /// ID already exists.
    async fn store(&self, booking: &Booking) -> BookingRepositoryResult<()>;

    /// Persists changes to an existing booking.
    ///
    /// The incoming revision must be exactly one ahead of the stored
    /// revision; a concurrent writer that got there first wins and the
    /// caller's whole operation is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BookingRepositoryError::NotFound`] when the booking does not
    /// exist, or [`BookingRepositoryError::RevisionConflict`] when the stored
    /// record has moved on since the caller read it.
    async fn update(&self, booking: &Booking) -> BookingRepositoryResult<()>;

    /// Finds a booking by identifier.
    ///
    /// Returns `None` when the booking does not exist.
    async fn find_by_id(&self, id: BookingId) -> BookingRepositoryResult<Option<Booking>>;

    /// Returns every booking in the store.
    async fn list_all(&self) -> BookingRepositoryResult<Vec<Booking>>;

    /// Returns the bookings created by the given customer.
    async fn list_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> BookingRepositoryResult<Vec<Booking>>;

    /// Returns the bookings ever linked to the given technician, regardless
    /// of status.
    async fn list_by_technician(
        &self,
        technician_id: TechnicianId,
    ) -> BookingRepositoryResult<Vec<Booking>>;
}

/// Errors returned by booking repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BookingRepositoryError {
    /// A booking with the same identifier already exists.
    #[error("duplicate booking identifier: {0}")]
    DuplicateBooking(BookingId),

    /// The booking was not found.
    #[error("booking not found: {0}")]
    NotFound(BookingId),

    /// A concurrent mutation of the same booking won the race.
    #[error("booking {0} was modified concurrently; reload and retry")]
    RevisionConflict(BookingId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BookingRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
