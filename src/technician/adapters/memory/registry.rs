//! In-memory technician repository with a user-account uniqueness index.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::technician::{
    domain::{Specialization, Technician, TechnicianId, UserId},
    ports::{TechnicianRepository, TechnicianRepositoryError, TechnicianRepositoryResult},
};

/// Thread-safe in-memory technician repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTechnicianRepository {
    technicians: Arc<DashMap<TechnicianId, Technician>>,
    user_index: Arc<DashMap<UserId, TechnicianId>>,
}

impl InMemoryTechnicianRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Clones matching profiles into a stable id-ordered listing.
fn collect_sorted<F>(
    technicians: &DashMap<TechnicianId, Technician>,
    mut keep: F,
) -> Vec<Technician>
where
    F: FnMut(&Technician) -> bool,
{
    let mut matches: Vec<Technician> = technicians
        .iter()
        .filter(|entry| keep(entry.value()))
        .map(|entry| entry.value().clone())
        .collect();
    matches.sort_by_key(|technician| technician.id().into_inner());
    matches
}

#[async_trait]
impl TechnicianRepository for InMemoryTechnicianRepository {
    async fn store(&self, technician: &Technician) -> TechnicianRepositoryResult<()> {
        if self.technicians.contains_key(&technician.id()) {
            return Err(TechnicianRepositoryError::DuplicateTechnician(
                technician.id(),
            ));
        }
        match self.user_index.entry(technician.user_id()) {
            Entry::Occupied(_) => Err(TechnicianRepositoryError::ProfileAlreadyExists(
                technician.user_id(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(technician.id());
                self.technicians
                    .insert(technician.id(), technician.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, technician: &Technician) -> TechnicianRepositoryResult<()> {
        let Some(mut stored) = self.technicians.get_mut(&technician.id()) else {
            return Err(TechnicianRepositoryError::NotFound(technician.id()));
        };
        *stored = technician.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TechnicianId) -> TechnicianRepositoryResult<Option<Technician>> {
        Ok(self.technicians.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> TechnicianRepositoryResult<Option<Technician>> {
        let technician = self
            .user_index
            .get(&user_id)
            .and_then(|entry| self.technicians.get(entry.value()))
            .map(|entry| entry.value().clone());
        Ok(technician)
    }

    async fn list_all(&self) -> TechnicianRepositoryResult<Vec<Technician>> {
        Ok(collect_sorted(&self.technicians, |_| true))
    }

    async fn list_by_specialization(
        &self,
        specialization: Specialization,
    ) -> TechnicianRepositoryResult<Vec<Technician>> {
        Ok(collect_sorted(&self.technicians, |technician| {
            technician.specialization() == specialization
        }))
    }
}
