//! Adapter implementations of the booking ports.

pub mod memory;
