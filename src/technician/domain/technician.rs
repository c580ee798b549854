//! Technician profile aggregate root.

use super::{Rating, Specialization, TechnicianDomainError, TechnicianId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Longest career length accepted at registration.
const MAX_EXPERIENCE_YEARS: u32 = 80;

/// Technician profile aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    id: TechnicianId,
    user_id: UserId,
    specialization: Specialization,
    experience_years: u32,
    bio: Option<String>,
    rating: Rating,
    total_jobs: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted technician profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTechnicianData {
    /// Persisted technician identifier.
    pub id: TechnicianId,
    /// Persisted owning user account.
    pub user_id: UserId,
    /// Persisted trade specialization.
    pub specialization: Specialization,
    /// Persisted career length in years.
    pub experience_years: u32,
    /// Persisted free-form profile text, if any.
    pub bio: Option<String>,
    /// Persisted quality rating.
    pub rating: Rating,
    /// Persisted completed-job counter.
    pub total_jobs: u64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest profile timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Technician {
    /// Creates a new unrated technician profile with no completed jobs.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianDomainError::ImplausibleExperience`] when the
    /// career length exceeds the accepted maximum.
    pub fn new(
        user_id: UserId,
        specialization: Specialization,
        experience_years: u32,
        bio: Option<String>,
        clock: &impl Clock,
    ) -> Result<Self, TechnicianDomainError> {
        validate_experience(experience_years)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: TechnicianId::new(),
            user_id,
            specialization,
            experience_years,
            bio: normalize_bio(bio),
            rating: Rating::unrated(),
            total_jobs: 0,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a technician from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTechnicianData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            specialization: data.specialization,
            experience_years: data.experience_years,
            bio: data.bio,
            rating: data.rating,
            total_jobs: data.total_jobs,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the technician identifier.
    #[must_use]
    pub const fn id(&self) -> TechnicianId {
        self.id
    }

    /// Returns the owning user account.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the trade specialization.
    #[must_use]
    pub const fn specialization(&self) -> Specialization {
        self.specialization
    }

    /// Returns the career length in years.
    #[must_use]
    pub const fn experience_years(&self) -> u32 {
        self.experience_years
    }

    /// Returns the free-form profile text, if any.
    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Returns the quality rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the completed-job counter.
    ///
    /// Accumulated at completion time rather than recomputed from the
    /// booking set, since history rows may be pruned.
    #[must_use]
    pub const fn total_jobs(&self) -> u64 {
        self.total_jobs
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest profile timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Changes the trade specialization.
    pub fn set_specialization(&mut self, specialization: Specialization, clock: &impl Clock) {
        self.specialization = specialization;
        self.touch(clock);
    }

    /// Changes the career length.
    ///
    /// # Errors
    ///
    /// Returns [`TechnicianDomainError::ImplausibleExperience`] when the new
    /// figure exceeds the accepted maximum.
    pub fn set_experience_years(
        &mut self,
        experience_years: u32,
        clock: &impl Clock,
    ) -> Result<(), TechnicianDomainError> {
        validate_experience(experience_years)?;
        self.experience_years = experience_years;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the free-form profile text. Blank text clears it.
    pub fn set_bio(&mut self, bio: Option<String>, clock: &impl Clock) {
        self.bio = normalize_bio(bio);
        self.touch(clock);
    }

    /// Replaces the quality rating.
    pub fn rate(&mut self, rating: Rating, clock: &impl Clock) {
        self.rating = rating;
        self.touch(clock);
    }

    /// Records one more completed job. The counter never decreases.
    pub fn record_completed_job(&mut self, clock: &impl Clock) {
        self.total_jobs = self.total_jobs.saturating_add(1);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Rejects career lengths beyond the accepted maximum.
const fn validate_experience(experience_years: u32) -> Result<(), TechnicianDomainError> {
    if experience_years > MAX_EXPERIENCE_YEARS {
        return Err(TechnicianDomainError::ImplausibleExperience(
            experience_years,
        ));
    }
    Ok(())
}

/// Trims profile text, mapping blank input to no bio at all.
fn normalize_bio(bio: Option<String>) -> Option<String> {
    bio.map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
