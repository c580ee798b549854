//! Identifier and validated scalar types for the technician domain.

use super::TechnicianDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a technician profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechnicianId(Uuid);

impl TechnicianId {
    /// Creates a new random technician identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a technician identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TechnicianId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TechnicianId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TechnicianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for the user account owning a technician profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer-sourced quality rating on a zero-to-five scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Upper bound of the rating scale.
    pub const MAX: f64 = 5.0;

    /// Creates a validated rating.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianDomainError::InvalidRating`] when the value is
    /// outside `[0, 5]` or not finite.
    pub fn new(value: f64) -> Result<Self, TechnicianDomainError> {
        if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) {
            return Err(TechnicianDomainError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    /// Returns the rating for a technician nobody has rated yet.
    #[must_use]
    pub const fn unrated() -> Self {
        Self(0.0)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::unrated()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
