//! Shared world state for booking lifecycle BDD scenarios.

use std::sync::Arc;

use fieldserve::booking::{
    adapters::memory::InMemoryBookingRepository,
    domain::{Booking, CustomerId},
    services::{AssignmentError, AssignmentService, BookingLifecycleError, BookingLifecycleService},
};
use fieldserve::technician::{
    adapters::memory::InMemoryTechnicianRepository, domain::Technician,
    services::TechnicianRegistryService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Lifecycle service type used by the BDD world.
pub type TestLifecycleService =
    BookingLifecycleService<InMemoryBookingRepository, InMemoryTechnicianRepository, DefaultClock>;

/// Assignment service type used by the BDD world.
pub type TestAssignmentService =
    AssignmentService<InMemoryBookingRepository, InMemoryTechnicianRepository, DefaultClock>;

/// Registry service type used by the BDD world.
pub type TestRegistryService =
    TechnicianRegistryService<InMemoryTechnicianRepository, DefaultClock>;

/// Scenario world for booking lifecycle behaviour tests.
pub struct BookingLifecycleWorld {
    pub lifecycle: TestLifecycleService,
    pub assignment: TestAssignmentService,
    pub registry: TestRegistryService,
    pub customer_id: CustomerId,
    pub booking: Option<Booking>,
    pub technician: Option<Technician>,
    pub last_lifecycle_result: Option<Result<Booking, BookingLifecycleError>>,
    pub last_assignment_result: Option<Result<Booking, AssignmentError>>,
}

impl BookingLifecycleWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let bookings = Arc::new(InMemoryBookingRepository::new());
        let technicians = Arc::new(InMemoryTechnicianRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
            lifecycle: BookingLifecycleService::new(
                Arc::clone(&bookings),
                Arc::clone(&technicians),
                Arc::clone(&clock),
            ),
            assignment: AssignmentService::new(
                bookings,
                Arc::clone(&technicians),
                Arc::clone(&clock),
            ),
            registry: TechnicianRegistryService::new(technicians, clock),
            customer_id: CustomerId::new(),
            booking: None,
            technician: None,
            last_lifecycle_result: None,
            last_assignment_result: None,
        }
    }
}

impl Default for BookingLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BookingLifecycleWorld {
    BookingLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
