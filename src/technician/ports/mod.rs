//! Port contracts for the technician registry.
//!
//! Ports define infrastructure-agnostic interfaces used by registry services.

pub mod repository;

pub use repository::{
    TechnicianRepository, TechnicianRepositoryError, TechnicianRepositoryResult,
};
