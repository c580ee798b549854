//! Step definitions for booking lifecycle behaviour scenarios.

mod given;
mod then;
mod when;
pub mod world;
