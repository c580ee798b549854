//! Port contracts for booking lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by booking services.

pub mod repository;

pub use repository::{BookingRepository, BookingRepositoryError, BookingRepositoryResult};
