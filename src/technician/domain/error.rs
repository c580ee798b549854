//! Error types for technician domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain technician values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TechnicianDomainError {
    /// The rating falls outside the permitted scale.
    #[error("rating {0} must be between 0 and 5")]
    InvalidRating(f64),

    /// The experience figure is beyond any plausible career length.
    #[error("experience of {0} years is not plausible")]
    ImplausibleExperience(u32),
}

/// Error returned while parsing specializations from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown specialization: {0}")]
pub struct ParseSpecializationError(pub String);
