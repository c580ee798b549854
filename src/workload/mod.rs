//! Read-side workload and fleet reporting for Fieldserve.
//!
//! This module derives per-technician job load and fleet-wide figures from
//! snapshots of the booking store and technician registry. It owns no state
//! and performs no writes, so every report is safe to recompute on demand;
//! slightly stale input is acceptable for the dashboards it feeds.
//!
//! - Value types in [`domain`]
//! - Reporting services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
