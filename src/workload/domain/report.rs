//! Per-technician workload report.

use super::LoadClassification;
use crate::technician::domain::TechnicianId;
use serde::{Deserialize, Serialize};

/// Snapshot of a technician's job load, computed on demand from the booking
/// store and the registry's completed-job counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianWorkload {
    /// Technician the figures describe.
    pub technician_id: TechnicianId,
    /// Bookings currently linked to the technician in a non-terminal status.
    pub active_jobs: usize,
    /// Bookings ever linked to the technician, regardless of status.
    pub total_assigned: usize,
    /// Completed jobs, read from the registry counter rather than recounted
    /// from bookings, since history rows may be pruned.
    pub completed_jobs: u64,
    /// Advisory load bucket derived from `active_jobs`.
    pub load: LoadClassification,
}
