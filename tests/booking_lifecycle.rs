//! Behaviour tests for the booking lifecycle.

#[path = "booking_lifecycle_steps/mod.rs"]
mod booking_lifecycle_steps_defs;

use booking_lifecycle_steps_defs::world::{BookingLifecycleWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/booking_lifecycle.feature",
    name = "Technician accepts an assigned booking"
)]
#[tokio::test(flavor = "multi_thread")]
async fn technician_accepts_assigned_booking(world: BookingLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/booking_lifecycle.feature",
    name = "Customer cancels a pending booking"
)]
#[tokio::test(flavor = "multi_thread")]
async fn customer_cancels_pending_booking(world: BookingLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/booking_lifecycle.feature",
    name = "Cancelled bookings reject acceptance"
)]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_booking_rejects_acceptance(world: BookingLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/booking_lifecycle.feature",
    name = "Customers cannot cancel accepted work"
)]
#[tokio::test(flavor = "multi_thread")]
async fn customer_cannot_cancel_accepted_work(world: BookingLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/booking_lifecycle.feature",
    name = "Assignment window closes once work starts"
)]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_window_closes_once_work_starts(world: BookingLifecycleWorld) {
    let _ = world;
}
