//! Technician registry for Fieldserve.
//!
//! This module owns technician profiles: specialization, experience, rating,
//! and the monotonic completed-job counter the workload view reads. Profiles
//! are registered once per owning user account and are mutated only through
//! the registry service. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
