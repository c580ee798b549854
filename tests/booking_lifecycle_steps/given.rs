//! Given steps for booking lifecycle BDD scenarios.

use super::world::{BookingLifecycleWorld, run_async};
use eyre::WrapErr;
use fieldserve::booking::{
    domain::{Actor, BookingStatus, ServiceId},
    services::{AdvanceStatusRequest, CreateBookingRequest},
};
use fieldserve::technician::{domain::UserId, services::RegisterTechnicianRequest};
use mockable::{Clock, DefaultClock};
use rstest_bdd_macros::given;

#[given("a pending booking for a customer")]
fn pending_booking(world: &mut BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let request = CreateBookingRequest::new(
        world.customer_id,
        ServiceId::new(),
        "Oven heats unevenly",
        "9 Tanners Yard",
        DefaultClock.utc(),
        "3:00 PM",
    );
    let booking = run_async(world.lifecycle.create_booking(request))
        .wrap_err("create booking in scenario setup")?;
    world.booking = Some(booking);
    Ok(())
}

#[given(r#"a registered "{trade}" technician"#)]
fn registered_technician(
    world: &mut BookingLifecycleWorld,
    trade: String,
) -> Result<(), eyre::Report> {
    let request = RegisterTechnicianRequest::new(UserId::new(), trade, 10);
    let technician = run_async(world.registry.register(request))
        .wrap_err("register technician in scenario setup")?;
    world.technician = Some(technician);
    Ok(())
}

#[given("the administrator has assigned the technician")]
fn administrator_assigned(world: &mut BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking in scenario world"))?;
    let technician = world
        .technician
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing technician in scenario world"))?;

    let assigned = run_async(world.assignment.assign_technician(
        booking.id(),
        technician.id(),
        Actor::Admin,
    ))
    .wrap_err("assign technician in scenario setup")?;
    world.booking = Some(assigned);
    Ok(())
}

#[given("the customer has cancelled the booking")]
fn customer_cancelled(world: &mut BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking in scenario world"))?;

    let cancelled = run_async(
        world
            .lifecycle
            .cancel_booking(booking.id(), Actor::Customer(world.customer_id)),
    )
    .wrap_err("cancel booking in scenario setup")?;
    world.booking = Some(cancelled);
    Ok(())
}

#[given("the technician has accepted the booking")]
fn technician_accepted(world: &mut BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking in scenario world"))?;
    let technician = world
        .technician
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing technician in scenario world"))?;

    let accepted = run_async(
        world
            .lifecycle
            .accept_booking(booking.id(), Actor::Technician(technician.id())),
    )
    .wrap_err("accept booking in scenario setup")?;
    world.booking = Some(accepted);
    Ok(())
}

#[given("the technician has started the work")]
fn technician_started(world: &mut BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking in scenario world"))?;
    let technician = world
        .technician
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing technician in scenario world"))?;

    let started = run_async(world.lifecycle.advance_status(
        AdvanceStatusRequest::new(booking.id(), BookingStatus::InProgress),
        Actor::Technician(technician.id()),
    ))
    .wrap_err("start work in scenario setup")?;
    world.booking = Some(started);
    Ok(())
}
