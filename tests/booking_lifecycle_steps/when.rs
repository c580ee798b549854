//! When steps for booking lifecycle BDD scenarios.

use super::world::{BookingLifecycleWorld, run_async};
use eyre::WrapErr;
use fieldserve::booking::domain::Actor;
use fieldserve::technician::{domain::UserId, services::RegisterTechnicianRequest};
use rstest_bdd_macros::when;

#[when("the technician accepts the booking")]
fn technician_accepts(world: &mut BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking in scenario world"))?;
    let technician = world
        .technician
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing technician in scenario world"))?;

    let result = run_async(
        world
            .lifecycle
            .accept_booking(booking.id(), Actor::Technician(technician.id())),
    );
    if let Ok(ref updated) = result {
        world.booking = Some(updated.clone());
    }
    world.last_lifecycle_result = Some(result);
    Ok(())
}

#[when("the customer cancels the booking")]
fn customer_cancels(world: &mut BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking in scenario world"))?;

    let result = run_async(
        world
            .lifecycle
            .cancel_booking(booking.id(), Actor::Customer(world.customer_id)),
    );
    if let Ok(ref updated) = result {
        world.booking = Some(updated.clone());
    }
    world.last_lifecycle_result = Some(result);
    Ok(())
}

#[when("the administrator assigns a replacement technician")]
fn administrator_reassigns(world: &mut BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking in scenario world"))?;

    let replacement = run_async(world.registry.register(RegisterTechnicianRequest::new(
        UserId::new(),
        "Electrician",
        4,
    )))
    .wrap_err("register replacement technician")?;

    let result = run_async(world.assignment.assign_technician(
        booking.id(),
        replacement.id(),
        Actor::Admin,
    ));
    if let Ok(ref updated) = result {
        world.booking = Some(updated.clone());
    }
    world.last_assignment_result = Some(result);
    Ok(())
}
