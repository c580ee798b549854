//! Domain model for technician profiles.
//!
//! The technician domain models provider identity, trade specialization, and
//! the profile counters consumed by the workload view, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod specialization;
mod technician;

pub use error::{ParseSpecializationError, TechnicianDomainError};
pub use ids::{Rating, TechnicianId, UserId};
pub use specialization::Specialization;
pub use technician::{PersistedTechnicianData, Technician};
