//! In-memory booking repository with per-record serialization.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::booking::{
    domain::{Booking, BookingId, CustomerId},
    ports::{BookingRepository, BookingRepositoryError, BookingRepositoryResult},
};
use crate::technician::domain::TechnicianId;

/// Thread-safe in-memory booking repository.
///
/// Records live in a sharded concurrent map, so operations against different
/// bookings never contend on a global lock. Reads clone whole records under
/// the entry guard and updates compare revisions under the same guard, which
/// keeps every record internally consistent and serializes concurrent
/// writers per booking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<DashMap<BookingId, Booking>>,
}

impl InMemoryBookingRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Clones matching records into a stable id-ordered listing.
fn collect_sorted<F>(bookings: &DashMap<BookingId, Booking>, mut keep: F) -> Vec<Booking>
where
    F: FnMut(&Booking) -> bool,
{
    let mut matches: Vec<Booking> = bookings
        .iter()
        .filter(|entry| keep(entry.value()))
        .map(|entry| entry.value().clone())
        .collect();
    matches.sort_by_key(Booking::id);
    matches
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn store(&self, booking: &Booking) -> BookingRepositoryResult<()> {
        match self.bookings.entry(booking.id()) {
            Entry::Occupied(_) => Err(BookingRepositoryError::DuplicateBooking(booking.id())),
            Entry::Vacant(slot) => {
                slot.insert(booking.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, booking: &Booking) -> BookingRepositoryResult<()> {
        let Some(mut stored) = self.bookings.get_mut(&booking.id()) else {
            return Err(BookingRepositoryError::NotFound(booking.id()));
        };
        if booking.revision() != stored.revision() + 1 {
            return Err(BookingRepositoryError::RevisionConflict(booking.id()));
        }
        *stored = booking.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: BookingId) -> BookingRepositoryResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> BookingRepositoryResult<Vec<Booking>> {
        Ok(collect_sorted(&self.bookings, |_| true))
    }

    async fn list_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> BookingRepositoryResult<Vec<Booking>> {
        Ok(collect_sorted(&self.bookings, |booking| {
            booking.customer_id() == customer_id
        }))
    }

    async fn list_by_technician(
        &self,
        technician_id: TechnicianId,
    ) -> BookingRepositoryResult<Vec<Booking>> {
        Ok(collect_sorted(&self.bookings, |booking| {
            booking.technician_id() == Some(technician_id)
        }))
    }
}
