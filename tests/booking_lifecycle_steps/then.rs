//! Then steps for booking lifecycle BDD scenarios.

use super::world::{BookingLifecycleWorld, run_async};
use fieldserve::booking::{
    domain::{Actor, BookingDomainError, BookingStatus},
    services::{AssignmentError, BookingLifecycleError},
};
use rstest_bdd_macros::then;

#[then(r#"the booking status is "{status}""#)]
fn booking_status_is(world: &BookingLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = BookingStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking"))?;
    let stored = run_async(world.lifecycle.get_booking(booking.id(), Actor::Admin))
        .map_err(|err| eyre::eyre!("reload booking: {err}"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}

#[then("the operation fails with an invalid transition error")]
fn fails_with_invalid_transition(world: &BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_lifecycle_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lifecycle result"))?;

    if !matches!(
        result,
        Err(BookingLifecycleError::Domain(
            BookingDomainError::InvalidTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the operation fails with a closed assignment window error")]
fn fails_with_closed_window(world: &BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_assignment_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing assignment result"))?;

    if !matches!(
        result,
        Err(AssignmentError::Domain(
            BookingDomainError::AssignmentWindowClosed { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected AssignmentWindowClosed error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the booking keeps its original technician")]
fn keeps_original_technician(world: &BookingLifecycleWorld) -> Result<(), eyre::Report> {
    let booking = world
        .booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking"))?;
    let technician = world
        .technician
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing technician"))?;

    let stored = run_async(world.lifecycle.get_booking(booking.id(), Actor::Admin))
        .map_err(|err| eyre::eyre!("reload booking: {err}"))?;

    if stored.technician_id() != Some(technician.id()) {
        return Err(eyre::eyre!(
            "expected booking to keep technician {}",
            technician.id()
        ));
    }
    Ok(())
}
