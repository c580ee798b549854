//! Booking lifecycle management for Fieldserve.
//!
//! This module owns the booking aggregate and the status state machine that
//! governs it: creation, technician assignment and reassignment, acceptance,
//! work start, completion, and cancellation. Every actor-facing mutation
//! routes through the domain guards here. The module follows hexagonal
//! architecture:
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
