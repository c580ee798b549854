//! Service layer for booking creation, retrieval, and status transitions.

use crate::booking::{
    domain::{
        Actor, Booking, BookingAction, BookingDetails, BookingDomainError, BookingId,
        BookingStatus, CustomerId, FinalPrice, PreferredTime, ProblemDescription, ServiceAddress,
        ServiceId,
    },
    ports::{BookingRepository, BookingRepositoryError},
};
use crate::technician::ports::{TechnicianRepository, TechnicianRepositoryError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingRequest {
    customer_id: CustomerId,
    service_id: ServiceId,
    problem_description: String,
    address: String,
    preferred_date: DateTime<Utc>,
    preferred_time: String,
}

impl CreateBookingRequest {
    /// Creates a request with the required booking fields.
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        service_id: ServiceId,
        problem_description: impl Into<String>,
        address: impl Into<String>,
        preferred_date: DateTime<Utc>,
        preferred_time: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            service_id,
            problem_description: problem_description.into(),
            address: address.into(),
            preferred_date,
            preferred_time: preferred_time.into(),
        }
    }
}

/// Request payload for advancing a booking to a target status.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvanceStatusRequest {
    booking_id: BookingId,
    target_status: BookingStatus,
    final_price: Option<f64>,
}

impl AdvanceStatusRequest {
    /// Creates a request targeting the given status.
    #[must_use]
    pub const fn new(booking_id: BookingId, target_status: BookingStatus) -> Self {
        Self {
            booking_id,
            target_status,
            final_price: None,
        }
    }

    /// Sets the price agreed at completion.
    #[must_use]
    pub const fn with_final_price(mut self, final_price: f64) -> Self {
        self.final_price = Some(final_price);
        self
    }
}

/// Listing scope for booking queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingListFilter {
    /// Bookings created by the requesting customer.
    MineAsCustomer,
    /// Bookings assigned to the requesting technician.
    MineAsTechnician,
    /// Every booking in the store; administrators only.
    AllAdmin,
}

impl BookingListFilter {
    /// Returns a short name for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MineAsCustomer => "mine_as_customer",
            Self::MineAsTechnician => "mine_as_technician",
            Self::AllAdmin => "all_admin",
        }
    }
}

impl fmt::Display for BookingListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-level errors for booking lifecycle operations.
#[derive(Debug, Error)]
pub enum BookingLifecycleError {
    /// Domain guard or validation failed.
    #[error(transparent)]
    Domain(#[from] BookingDomainError),
    /// Booking store operation failed.
    #[error(transparent)]
    Repository(#[from] BookingRepositoryError),
    /// Technician registry operation failed.
    #[error(transparent)]
    TechnicianRepository(#[from] TechnicianRepositoryError),
    /// The listing scope does not match the requesting actor's role.
    #[error("list filter {0} does not match the requesting actor")]
    FilterMismatch(BookingListFilter),
}

/// Result type for booking lifecycle service operations.
pub type BookingLifecycleResult<T> = Result<T, BookingLifecycleError>;

/// Booking lifecycle orchestration service.
///
/// Holds the technician registry port alongside the booking store so that
/// completing a booking can credit the technician's completed-job counter in
/// the same operation.
#[derive(Clone)]
pub struct BookingLifecycleService<B, T, C>
where
    B: BookingRepository,
    T: TechnicianRepository,
    C: Clock + Send + Sync,
{
    bookings: Arc<B>,
    technicians: Arc<T>,
    clock: Arc<C>,
}

impl<B, T, C> BookingLifecycleService<B, T, C>
where
    B: BookingRepository,
    T: TechnicianRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new booking lifecycle service.
    #[must_use]
    pub const fn new(bookings: Arc<B>, technicians: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            bookings,
            technicians,
            clock,
        }
    }

    /// Creates a pending booking from customer input.
    ///
    /// # Errors
    ///
    /// Returns [`BookingLifecycleError`] when input validation fails or the
    /// store rejects persistence.
    pub async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> BookingLifecycleResult<Booking> {
        let CreateBookingRequest {
            customer_id,
            service_id,
            problem_description,
            address,
            preferred_date,
            preferred_time,
        } = request;

        let details = BookingDetails {
            problem_description: ProblemDescription::new(problem_description)?,
            address: ServiceAddress::new(address)?,
            preferred_date,
            preferred_time: PreferredTime::new(preferred_time)?,
        };

        let booking = Booking::new(customer_id, service_id, details, &*self.clock);
        self.bookings.store(&booking).await?;
        tracing::info!(booking_id = %booking.id(), customer_id = %customer_id, "Booking created");
        Ok(booking)
    }

    /// Retrieves a booking visible to the requesting actor.
    ///
    /// # Errors
    ///
    /// Returns [`BookingRepositoryError::NotFound`] when the booking does not
    /// exist, or [`BookingDomainError::NotVisible`] when the actor is neither
    /// an administrator, the owning customer, nor the assigned technician.
    pub async fn get_booking(
        &self,
        booking_id: BookingId,
        actor: Actor,
    ) -> BookingLifecycleResult<Booking> {
        let booking = self.find_by_id_or_error(booking_id).await?;
        if !booking.is_visible_to(actor) {
            return Err(BookingDomainError::NotVisible(booking_id).into());
        }
        Ok(booking)
    }

    /// Lists bookings in the requested scope.
    ///
    /// The listing is a restartable snapshot in stable booking-id order.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::AdminRequired`] when a non-administrator
    /// requests the full store, or
    /// [`BookingLifecycleError::FilterMismatch`] when the scope does not fit
    /// the actor's role.
    pub async fn list_bookings(
        &self,
        filter: BookingListFilter,
        actor: Actor,
    ) -> BookingLifecycleResult<Vec<Booking>> {
        match (filter, actor) {
            (BookingListFilter::AllAdmin, Actor::Admin) => Ok(self.bookings.list_all().await?),
            (BookingListFilter::AllAdmin, _) => {
                Err(BookingDomainError::AdminRequired(BookingAction::ListAll).into())
            }
            (BookingListFilter::MineAsCustomer, Actor::Customer(customer_id)) => {
                Ok(self.bookings.list_by_customer(customer_id).await?)
            }
            (BookingListFilter::MineAsTechnician, Actor::Technician(technician_id)) => {
                Ok(self.bookings.list_by_technician(technician_id).await?)
            }
            _ => Err(BookingLifecycleError::FilterMismatch(filter)),
        }
    }

    /// Records the assigned technician's acceptance of a pending booking.
    ///
    /// # Errors
    ///
    /// Returns [`BookingLifecycleError`] when the booking is unknown, the
    /// transition is invalid, or the actor is not the assigned technician.
    pub async fn accept_booking(
        &self,
        booking_id: BookingId,
        actor: Actor,
    ) -> BookingLifecycleResult<Booking> {
        let mut booking = self.find_by_id_or_error(booking_id).await?;
        booking.accept(actor, &*self.clock)?;
        self.bookings.update(&booking).await?;
        tracing::debug!(booking_id = %booking_id, "Booking accepted");
        Ok(booking)
    }

    /// Advances a booking toward the requested target status.
    ///
    /// Completion credits the assigned technician's completed-job counter.
    /// A final price is honored only when the target is
    /// [`BookingStatus::Completed`].
    ///
    /// # Errors
    ///
    /// Returns [`BookingLifecycleError`] when the booking is unknown, the
    /// edge is not in the transition table, the actor fails a guard, or a
    /// final price accompanies a non-completion target.
    pub async fn advance_status(
        &self,
        request: AdvanceStatusRequest,
        actor: Actor,
    ) -> BookingLifecycleResult<Booking> {
        let AdvanceStatusRequest {
            booking_id,
            target_status,
            final_price,
        } = request;

        if final_price.is_some() && target_status != BookingStatus::Completed {
            return Err(BookingDomainError::FinalPriceOutsideCompletion.into());
        }

        let mut booking = self.find_by_id_or_error(booking_id).await?;
        match target_status {
            BookingStatus::Accepted => booking.accept(actor, &*self.clock)?,
            BookingStatus::InProgress => booking.start(actor, &*self.clock)?,
            BookingStatus::Completed => {
                let price = final_price.map(FinalPrice::new).transpose()?;
                booking.complete(actor, price, &*self.clock)?;
            }
            BookingStatus::Cancelled => booking.cancel(actor, &*self.clock)?,
            BookingStatus::Pending => {
                return Err(BookingDomainError::InvalidTransition {
                    booking_id,
                    from: booking.status(),
                    to: BookingStatus::Pending,
                }
                .into());
            }
        }
        self.bookings.update(&booking).await?;

        if booking.status() == BookingStatus::Completed {
            self.credit_completed_job(&booking).await?;
        }
        tracing::debug!(
            booking_id = %booking_id,
            status = %booking.status(),
            "Booking status advanced"
        );
        Ok(booking)
    }

    /// Withdraws a pending booking on behalf of its customer.
    ///
    /// # Errors
    ///
    /// Returns [`BookingLifecycleError`] when the booking is unknown, no
    /// longer pending, or the actor is not the owning customer.
    pub async fn cancel_booking(
        &self,
        booking_id: BookingId,
        actor: Actor,
    ) -> BookingLifecycleResult<Booking> {
        let mut booking = self.find_by_id_or_error(booking_id).await?;
        booking.cancel(actor, &*self.clock)?;
        self.bookings.update(&booking).await?;
        tracing::info!(booking_id = %booking_id, "Booking cancelled");
        Ok(booking)
    }

    /// Credits the completed booking to its technician's counter.
    async fn credit_completed_job(&self, booking: &Booking) -> BookingLifecycleResult<()> {
        let Some(technician_id) = booking.technician_id() else {
            return Ok(());
        };
        let mut technician = self
            .technicians
            .find_by_id(technician_id)
            .await?
            .ok_or(TechnicianRepositoryError::NotFound(technician_id))?;
        technician.record_completed_job(&*self.clock);
        self.technicians.update(&technician).await?;
        tracing::debug!(
            technician_id = %technician_id,
            total_jobs = technician.total_jobs(),
            "Completed-job counter advanced"
        );
        Ok(())
    }

    async fn find_by_id_or_error(&self, booking_id: BookingId) -> BookingLifecycleResult<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| BookingRepositoryError::NotFound(booking_id).into())
    }
}
