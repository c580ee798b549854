//! Service layer for technician registration and discovery.
//!
//! Provides [`TechnicianRegistryService`] which coordinates profile
//! registration, profile updates, rating, and the completed-job counter.
//! Profile ownership checks (a technician editing only their own profile)
//! belong to the surrounding layer, which resolves credentials before
//! calling in here.

use crate::technician::{
    domain::{
        ParseSpecializationError, Rating, Specialization, Technician, TechnicianDomainError,
        TechnicianId, UserId,
    },
    ports::{TechnicianRepository, TechnicianRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a technician profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTechnicianRequest {
    user_id: UserId,
    specialization: String,
    experience_years: u32,
    bio: Option<String>,
}

impl RegisterTechnicianRequest {
    /// Creates a request with the required profile fields.
    #[must_use]
    pub fn new(user_id: UserId, specialization: impl Into<String>, experience_years: u32) -> Self {
        Self {
            user_id,
            specialization: specialization.into(),
            experience_years,
            bio: None,
        }
    }

    /// Sets the free-form profile text.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }
}

/// Request payload for updating an existing profile.
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateTechnicianProfileRequest {
    specialization: Option<String>,
    experience_years: Option<u32>,
    bio: Option<String>,
}

impl UpdateTechnicianProfileRequest {
    /// Creates an empty update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new trade specialization.
    #[must_use]
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    /// Sets a new career length.
    #[must_use]
    pub const fn with_experience_years(mut self, experience_years: u32) -> Self {
        self.experience_years = Some(experience_years);
        self
    }

    /// Replaces the free-form profile text. Blank text clears it.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }
}

/// Service-level errors for technician registry operations.
#[derive(Debug, Error)]
pub enum TechnicianRegistryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TechnicianDomainError),
    /// The specialization string is not a known trade.
    #[error(transparent)]
    Specialization(#[from] ParseSpecializationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TechnicianRepositoryError),
}

/// Result type for technician registry service operations.
pub type TechnicianRegistryResult<T> = Result<T, TechnicianRegistryError>;

/// Technician registration and discovery orchestration service.
#[derive(Clone)]
pub struct TechnicianRegistryService<R, C>
where
    R: TechnicianRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TechnicianRegistryService<R, C>
where
    R: TechnicianRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new technician registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new technician profile.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRegistryError`] when input validation fails, the
    /// user already has a profile, or persistence is rejected.
    pub async fn register(
        &self,
        request: RegisterTechnicianRequest,
    ) -> TechnicianRegistryResult<Technician> {
        let RegisterTechnicianRequest {
            user_id,
            specialization,
            experience_years,
            bio,
        } = request;

        let trade = Specialization::try_from(specialization.as_str())?;
        let technician = Technician::new(user_id, trade, experience_years, bio, &*self.clock)?;
        self.repository.store(&technician).await?;
        tracing::info!(
            technician_id = %technician.id(),
            specialization = %technician.specialization(),
            "Technician registered"
        );
        Ok(technician)
    }

    /// Finds a profile by technician identifier.
    ///
    /// Returns `Ok(None)` when no profile has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRegistryError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(
        &self,
        id: TechnicianId,
    ) -> TechnicianRegistryResult<Option<Technician>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds the profile owned by the given user account.
    ///
    /// Returns `Ok(None)` when the user has no technician profile.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRegistryError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> TechnicianRegistryResult<Option<Technician>> {
        Ok(self.repository.find_by_user_id(user_id).await?)
    }

    /// Returns every registered profile.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRegistryError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_all(&self) -> TechnicianRegistryResult<Vec<Technician>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns the profiles registered under the given specialization.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRegistryError::Specialization`] when the string is
    /// not a known trade, or [`TechnicianRegistryError::Repository`] when
    /// persistence lookup fails.
    pub async fn list_by_specialization(
        &self,
        specialization: &str,
    ) -> TechnicianRegistryResult<Vec<Technician>> {
        let trade = Specialization::try_from(specialization)?;
        Ok(self.repository.list_by_specialization(trade).await?)
    }

    /// Applies a partial profile update.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRegistryError`] when the profile is unknown, a
    /// field fails validation, or persistence is rejected.
    pub async fn update_profile(
        &self,
        id: TechnicianId,
        request: UpdateTechnicianProfileRequest,
    ) -> TechnicianRegistryResult<Technician> {
        let UpdateTechnicianProfileRequest {
            specialization,
            experience_years,
            bio,
        } = request;

        let mut technician = self.find_by_id_or_error(id).await?;
        if let Some(value) = specialization {
            let parsed = Specialization::try_from(value.as_str())?;
            technician.set_specialization(parsed, &*self.clock);
        }
        if let Some(value) = experience_years {
            technician.set_experience_years(value, &*self.clock)?;
        }
        if let Some(value) = bio {
            technician.set_bio(Some(value), &*self.clock);
        }
        self.repository.update(&technician).await?;
        Ok(technician)
    }

    /// Replaces a technician's quality rating.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianDomainError::InvalidRating`] when the value is
    /// outside the scale, or [`TechnicianRegistryError::Repository`] when the
    /// profile is unknown or persistence fails.
    pub async fn rate(&self, id: TechnicianId, rating: f64) -> TechnicianRegistryResult<Technician> {
        let validated = Rating::new(rating)?;
        let mut technician = self.find_by_id_or_error(id).await?;
        technician.rate(validated, &*self.clock);
        self.repository.update(&technician).await?;
        Ok(technician)
    }

    /// Records one more completed job for a technician.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianRegistryError::Repository`] when the profile is
    /// unknown or persistence fails.
    pub async fn record_completed_job(
        &self,
        id: TechnicianId,
    ) -> TechnicianRegistryResult<Technician> {
        let mut technician = self.find_by_id_or_error(id).await?;
        technician.record_completed_job(&*self.clock);
        self.repository.update(&technician).await?;
        Ok(technician)
    }

    async fn find_by_id_or_error(&self, id: TechnicianId) -> TechnicianRegistryResult<Technician> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TechnicianRepositoryError::NotFound(id).into())
    }
}
