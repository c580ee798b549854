//! Validated value types describing the requested work.

use super::BookingDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer-supplied description of the problem to fix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemDescription(String);

impl ProblemDescription {
    /// Creates a validated problem description.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::EmptyProblemDescription`] when the value
    /// is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BookingDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(BookingDomainError::EmptyProblemDescription);
        }
        Ok(Self(trimmed))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProblemDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProblemDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Street address where the work takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceAddress(String);

impl ServiceAddress {
    /// Creates a validated service address.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::EmptyAddress`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BookingDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(BookingDomainError::EmptyAddress);
        }
        Ok(Self(trimmed))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form time slot the customer prefers, e.g. `"10:00 AM"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferredTime(String);

impl PreferredTime {
    /// Creates a validated preferred time slot.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::EmptyPreferredTime`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BookingDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(BookingDomainError::EmptyPreferredTime);
        }
        Ok(Self(trimmed))
    }

    /// Returns the time slot as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PreferredTime {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PreferredTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price agreed when a booking completes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalPrice(f64);

impl FinalPrice {
    /// Creates a validated final price.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::InvalidFinalPrice`] when the value is
    /// negative or not finite.
    pub fn new(value: f64) -> Result<Self, BookingDomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(BookingDomainError::InvalidFinalPrice(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying amount.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for FinalPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Validated work-request fields captured at booking creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    /// What the customer reports as broken.
    pub problem_description: ProblemDescription,
    /// Where the work takes place.
    pub address: ServiceAddress,
    /// Day the customer prefers.
    pub preferred_date: DateTime<Utc>,
    /// Time slot the customer prefers.
    pub preferred_time: PreferredTime,
}
