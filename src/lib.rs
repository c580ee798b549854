//! Fieldserve: home-service booking coordination core.
//!
//! This crate provides the booking lifecycle state machine, administrative
//! technician assignment, and the read-side workload view that together
//! coordinate customers, technicians, and administrators. The surrounding
//! presentation/API layer resolves identity and renders results; every
//! mutation of a booking or technician record routes through the services
//! here.
//!
//! # Architecture
//!
//! Fieldserve follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`booking`]: Booking records, the status transition table, and the
//!   lifecycle and assignment services
//! - [`technician`]: Technician profiles and the registry service
//! - [`workload`]: On-demand load classification and fleet reporting

pub mod booking;
pub mod technician;
pub mod workload;
