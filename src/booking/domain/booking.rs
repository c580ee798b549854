//! Booking aggregate root and its guarded lifecycle mutations.

use super::{
    Actor, BookingAction, BookingDetails, BookingDomainError, BookingId, BookingStatus,
    CustomerId, FinalPrice, ServiceId,
};
use crate::technician::domain::TechnicianId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Booking aggregate root.
///
/// All status changes go through the guarded mutators on this type; no field
/// is mutable from outside the aggregate. Each successful mutation bumps the
/// optimistic `revision` exactly once, which the booking store checks on
/// update to serialize concurrent requests against the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    customer_id: CustomerId,
    service_id: ServiceId,
    technician_id: Option<TechnicianId>,
    details: BookingDetails,
    status: BookingStatus,
    final_price: Option<FinalPrice>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    revision: u64,
}

/// Parameter object for reconstructing a persisted booking aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedBookingData {
    /// Persisted booking identifier.
    pub id: BookingId,
    /// Persisted owning customer.
    pub customer_id: CustomerId,
    /// Persisted service catalogue reference.
    pub service_id: ServiceId,
    /// Persisted technician assignment, if any.
    pub technician_id: Option<TechnicianId>,
    /// Persisted work-request details.
    pub details: BookingDetails,
    /// Persisted lifecycle status.
    pub status: BookingStatus,
    /// Persisted final price, if completed with one.
    pub final_price: Option<FinalPrice>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted optimistic concurrency token.
    pub revision: u64,
}

impl Booking {
    /// Creates a new pending booking with no technician assigned.
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        service_id: ServiceId,
        details: BookingDetails,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: BookingId::new(),
            customer_id,
            service_id,
            technician_id: None,
            details,
            status: BookingStatus::Pending,
            final_price: None,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
            revision: 0,
        }
    }

    /// Reconstructs a booking from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBookingData) -> Self {
        Self {
            id: data.id,
            customer_id: data.customer_id,
            service_id: data.service_id,
            technician_id: data.technician_id,
            details: data.details,
            status: data.status,
            final_price: data.final_price,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
            revision: data.revision,
        }
    }

    /// Returns the booking identifier.
    #[must_use]
    pub const fn id(&self) -> BookingId {
        self.id
    }

    /// Returns the owning customer.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the service catalogue reference.
    #[must_use]
    pub const fn service_id(&self) -> ServiceId {
        self.service_id
    }

    /// Returns the assigned technician, if any.
    #[must_use]
    pub const fn technician_id(&self) -> Option<TechnicianId> {
        self.technician_id
    }

    /// Returns the work-request details.
    #[must_use]
    pub const fn details(&self) -> &BookingDetails {
        &self.details
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns the final price, if one was recorded at completion.
    #[must_use]
    pub const fn final_price(&self) -> Option<FinalPrice> {
        self.final_price
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp, if the booking completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the optimistic concurrency token.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` when the actor may read this booking.
    ///
    /// Visible to administrators, the owning customer, and the assigned
    /// technician.
    #[must_use]
    pub fn is_visible_to(&self, actor: Actor) -> bool {
        match actor {
            Actor::Admin => true,
            Actor::Customer(customer_id) => customer_id == self.customer_id,
            Actor::Technician(technician_id) => self.technician_id == Some(technician_id),
        }
    }

    /// Links a technician to this booking, replacing any existing link.
    ///
    /// Assignment never advances the lifecycle; reassigning an `Accepted`
    /// booking reverts it to `Pending` because acceptance belongs to the
    /// displaced technician, not the record.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::AssignmentWindowClosed`] when the status
    /// is outside the `Pending`/`Accepted` window.
    pub fn assign(
        &mut self,
        technician_id: TechnicianId,
        clock: &impl Clock,
    ) -> Result<(), BookingDomainError> {
        match self.status {
            BookingStatus::Pending => {}
            BookingStatus::Accepted => {
                self.status = BookingStatus::Pending;
            }
            status => {
                return Err(BookingDomainError::AssignmentWindowClosed {
                    booking_id: self.id,
                    status,
                });
            }
        }
        self.technician_id = Some(technician_id);
        self.touch(clock);
        Ok(())
    }

    /// Records the assigned technician's commitment, moving the booking to
    /// [`BookingStatus::Accepted`].
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::InvalidTransition`] when the booking is
    /// not `Pending`, [`BookingDomainError::NotAssigned`] when no technician
    /// is linked, or [`BookingDomainError::NotAssignedTechnician`] when the
    /// actor is not the linked technician.
    pub fn accept(&mut self, actor: Actor, clock: &impl Clock) -> Result<(), BookingDomainError> {
        self.ensure_transition(BookingStatus::Accepted)?;
        self.ensure_assigned_actor(actor, BookingAction::Accept)?;
        self.status = BookingStatus::Accepted;
        self.touch(clock);
        Ok(())
    }

    /// Marks work as underway, moving the booking to
    /// [`BookingStatus::InProgress`].
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::InvalidTransition`] when the booking is
    /// not `Accepted`, [`BookingDomainError::NotAssigned`] when no technician
    /// is linked, or [`BookingDomainError::NotAssignedTechnician`] when the
    /// actor is not the linked technician.
    pub fn start(&mut self, actor: Actor, clock: &impl Clock) -> Result<(), BookingDomainError> {
        self.ensure_transition(BookingStatus::InProgress)?;
        self.ensure_assigned_actor(actor, BookingAction::Start)?;
        self.status = BookingStatus::InProgress;
        self.touch(clock);
        Ok(())
    }

    /// Marks work as done, moving the booking to
    /// [`BookingStatus::Completed`] and stamping the completion time.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::InvalidTransition`] when the booking is
    /// not `InProgress`, [`BookingDomainError::NotAssigned`] when no
    /// technician is linked, or
    /// [`BookingDomainError::NotAssignedTechnician`] when the actor is not
    /// the linked technician.
    pub fn complete(
        &mut self,
        actor: Actor,
        final_price: Option<FinalPrice>,
        clock: &impl Clock,
    ) -> Result<(), BookingDomainError> {
        self.ensure_transition(BookingStatus::Completed)?;
        self.ensure_assigned_actor(actor, BookingAction::Complete)?;
        self.status = BookingStatus::Completed;
        self.final_price = final_price;
        self.completed_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Withdraws the request, moving the booking to
    /// [`BookingStatus::Cancelled`].
    ///
    /// Cancellation is a before-commitment act only: once a technician has
    /// accepted, the edge leaves the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::InvalidTransition`] when the booking is
    /// not `Pending`, or [`BookingDomainError::NotOwningCustomer`] when the
    /// actor is not the booking's customer.
    pub fn cancel(&mut self, actor: Actor, clock: &impl Clock) -> Result<(), BookingDomainError> {
        self.ensure_transition(BookingStatus::Cancelled)?;
        match actor {
            Actor::Customer(customer_id) if customer_id == self.customer_id => {}
            _ => return Err(BookingDomainError::NotOwningCustomer(self.id)),
        }
        self.status = BookingStatus::Cancelled;
        self.touch(clock);
        Ok(())
    }

    /// Validates the status edge against the transition table.
    fn ensure_transition(&self, to: BookingStatus) -> Result<(), BookingDomainError> {
        if self.status.can_transition_to(to) {
            Ok(())
        } else {
            Err(BookingDomainError::InvalidTransition {
                booking_id: self.id,
                from: self.status,
                to,
            })
        }
    }

    /// Validates that the actor is the technician linked to this booking.
    fn ensure_assigned_actor(
        &self,
        actor: Actor,
        action: BookingAction,
    ) -> Result<(), BookingDomainError> {
        let assigned = self
            .technician_id
            .ok_or(BookingDomainError::NotAssigned(self.id))?;
        match actor {
            Actor::Technician(technician_id) if technician_id == assigned => Ok(()),
            _ => Err(BookingDomainError::NotAssignedTechnician {
                booking_id: self.id,
                action,
            }),
        }
    }

    /// Advances `updated_at` and bumps the concurrency token.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.revision += 1;
    }
}
