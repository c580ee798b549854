//! Repository port for technician profile persistence and lookup.

use crate::technician::domain::{Specialization, Technician, TechnicianId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for technician repository operations.
pub type TechnicianRepositoryResult<T> = Result<T, TechnicianRepositoryError>;

/// Technician persistence contract.
#[async_trait]
pub trait TechnicianRepository: Send + Sync {
    /// Stores a new technician profile.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRepositoryError::DuplicateTechnician`] when the
    /// profile ID already exists, or
    /// [`TechnicianRepositoryError::ProfileAlreadyExists`] when the owning
    /// user already has a profile.
    async fn store(&self, technician: &Technician) -> TechnicianRepositoryResult<()>;

    /// Persists changes to an existing profile.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRepositoryError::NotFound`] when the profile does
    /// not exist.
    async fn update(&self, technician: &Technician) -> TechnicianRepositoryResult<()>;

    /// Finds a profile by technician identifier.
    ///
    /// Returns `None` when the profile does not exist.
    async fn find_by_id(&self, id: TechnicianId) -> TechnicianRepositoryResult<Option<Technician>>;

    /// Finds the profile owned by the given user account.
    ///
    /// Returns `None` when the user has no technician profile.
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> TechnicianRepositoryResult<Option<Technician>>;

    /// Returns every registered profile.
    async fn list_all(&self) -> TechnicianRepositoryResult<Vec<Technician>>;

    /// Returns the profiles registered under the given specialization.
    async fn list_by_specialization(
        &self,
        specialization: Specialization,
    ) -> TechnicianRepositoryResult<Vec<Technician>>;
}

/// Errors returned by technician repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TechnicianRepositoryError {
    /// A profile with the same identifier already exists.
    #[error("duplicate technician identifier: {0}")]
    DuplicateTechnician(TechnicianId),

    /// The owning user already has a technician profile.
    #[error("technician profile already exists for user {0}")]
    ProfileAlreadyExists(UserId),

    /// The profile was not found.
    #[error("technician not found: {0}")]
    NotFound(TechnicianId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TechnicianRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
