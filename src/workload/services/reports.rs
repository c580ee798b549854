//! Service layer computing workload and fleet reports.

use crate::booking::{
    domain::BookingStatus,
    ports::{BookingRepository, BookingRepositoryError},
};
use crate::technician::{
    domain::TechnicianId,
    ports::{TechnicianRepository, TechnicianRepositoryError},
};
use crate::workload::domain::{LoadClassification, TechnicianWorkload};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for workload reporting.
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// Booking store read failed.
    #[error(transparent)]
    Repository(#[from] BookingRepositoryError),
    /// Technician registry read failed.
    #[error(transparent)]
    TechnicianRepository(#[from] TechnicianRepositoryError),
}

/// Result type for workload reporting operations.
pub type WorkloadResult<T> = Result<T, WorkloadError>;

/// Read-side workload aggregation service.
///
/// Holds only ports it reads through; it never writes and keeps no state of
/// its own, so reports may be recomputed freely.
#[derive(Clone)]
pub struct WorkloadService<B, T>
where
    B: BookingRepository,
    T: TechnicianRepository,
{
    bookings: Arc<B>,
    technicians: Arc<T>,
}

impl<B, T> WorkloadService<B, T>
where
    B: BookingRepository,
    T: TechnicianRepository,
{
    /// Creates a new workload reporting service.
    #[must_use]
    pub const fn new(bookings: Arc<B>, technicians: Arc<T>) -> Self {
        Self {
            bookings,
            technicians,
        }
    }

    /// Computes the workload report for one technician.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRepositoryError::NotFound`] when the technician is
    /// unknown, or a repository error when either store read fails.
    pub async fn technician_workload(
        &self,
        technician_id: TechnicianId,
    ) -> WorkloadResult<TechnicianWorkload> {
        let technician = self
            .technicians
            .find_by_id(technician_id)
            .await?
            .ok_or(TechnicianRepositoryError::NotFound(technician_id))?;

        let assigned = self.bookings.list_by_technician(technician_id).await?;
        let active_jobs = assigned
            .iter()
            .filter(|booking| !booking.status().is_terminal())
            .count();

        Ok(TechnicianWorkload {
            technician_id,
            active_jobs,
            total_assigned: assigned.len(),
            completed_jobs: technician.total_jobs(),
            load: LoadClassification::classify(active_jobs),
        })
    }

    /// Counts bookings per status across the whole fleet.
    ///
    /// Every status appears in the mapping, with zero for statuses no
    /// booking currently holds.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the booking store read fails.
    pub async fn status_distribution(&self) -> WorkloadResult<BTreeMap<BookingStatus, usize>> {
        let mut distribution: BTreeMap<BookingStatus, usize> =
            BookingStatus::ALL.iter().map(|status| (*status, 0)).collect();
        for booking in self.bookings.list_all().await? {
            if let Some(count) = distribution.get_mut(&booking.status()) {
                *count += 1;
            }
        }
        Ok(distribution)
    }

    /// Computes the fleet-wide completed share of all bookings.
    ///
    /// Returns a ratio in `[0, 1]`; an empty fleet reports `0` rather than
    /// dividing by zero.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the booking store read fails.
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "advisory dashboard ratio; exactness beyond f64 is not required"
    )]
    pub async fn completion_rate(&self) -> WorkloadResult<f64> {
        let bookings = self.bookings.list_all().await?;
        if bookings.is_empty() {
            return Ok(0.0);
        }
        let completed = bookings
            .iter()
            .filter(|booking| booking.status() == BookingStatus::Completed)
            .count();
        Ok(completed as f64 / bookings.len() as f64)
    }
}
