//! Unit tests for technician domain values and profile mutation.

use crate::technician::domain::{
    PersistedTechnicianData, Rating, Specialization, Technician, TechnicianDomainError,
    TechnicianId, UserId,
};
use eyre::ensure;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn electrician(clock: DefaultClock) -> Result<Technician, TechnicianDomainError> {
    Technician::new(
        UserId::new(),
        Specialization::Electrician,
        9,
        Some("Rewiring and consumer unit upgrades".to_owned()),
        &clock,
    )
}

#[rstest]
#[case(Specialization::General, "general", "General")]
#[case(Specialization::Electrician, "electrician", "Electrician")]
#[case(Specialization::Plumber, "plumber", "Plumber")]
#[case(Specialization::HvacTechnician, "hvac_technician", "HVAC Technician")]
#[case(Specialization::ApplianceRepair, "appliance_repair", "Appliance Repair")]
#[case(Specialization::Carpenter, "carpenter", "Carpenter")]
#[case(Specialization::Painter, "painter", "Painter")]
fn specialization_names_round_trip(
    #[case] specialization: Specialization,
    #[case] wire_name: &str,
    #[case] label: &str,
) -> eyre::Result<()> {
    ensure!(specialization.as_str() == wire_name);
    ensure!(specialization.display_name() == label);
    ensure!(Specialization::try_from(wire_name)? == specialization);
    ensure!(Specialization::try_from(label)? == specialization);
    Ok(())
}

#[rstest]
fn specialization_parsing_rejects_unknown_trades() {
    assert!(Specialization::try_from("locksmith").is_err());
}

#[rstest]
#[case(0.0, true)]
#[case(3.7, true)]
#[case(5.0, true)]
#[case(5.1, false)]
#[case(-1.0, false)]
#[case(f64::NAN, false)]
fn rating_must_sit_on_the_scale(#[case] value: f64, #[case] valid: bool) {
    assert_eq!(Rating::new(value).is_ok(), valid);
}

#[rstest]
fn new_profile_starts_unrated_with_no_jobs(
    electrician: Result<Technician, TechnicianDomainError>,
) -> eyre::Result<()> {
    let technician = electrician?;

    ensure!(technician.rating() == Rating::unrated());
    ensure!(technician.total_jobs() == 0);
    ensure!(technician.experience_years() == 9);
    ensure!(technician.bio() == Some("Rewiring and consumer unit upgrades"));
    Ok(())
}

#[rstest]
fn implausible_experience_is_rejected(clock: DefaultClock) {
    let result = Technician::new(UserId::new(), Specialization::Plumber, 120, None, &clock);

    assert_eq!(
        result.map(|_| ()),
        Err(TechnicianDomainError::ImplausibleExperience(120))
    );
}

#[rstest]
fn blank_bio_is_cleared(
    clock: DefaultClock,
    electrician: Result<Technician, TechnicianDomainError>,
) -> eyre::Result<()> {
    let mut technician = electrician?;

    technician.set_bio(Some("   ".to_owned()), &clock);

    ensure!(technician.bio().is_none());
    Ok(())
}

#[rstest]
fn completed_job_counter_only_grows(
    clock: DefaultClock,
    electrician: Result<Technician, TechnicianDomainError>,
) -> eyre::Result<()> {
    let mut technician = electrician?;

    technician.record_completed_job(&clock);
    technician.record_completed_job(&clock);

    ensure!(technician.total_jobs() == 2);
    Ok(())
}

#[rstest]
fn persisted_profile_rehydrates_every_field(clock: DefaultClock) -> eyre::Result<()> {
    let timestamp = clock.utc();
    let data = PersistedTechnicianData {
        id: TechnicianId::new(),
        user_id: UserId::new(),
        specialization: Specialization::Carpenter,
        experience_years: 22,
        bio: None,
        rating: Rating::new(4.0)?,
        total_jobs: 57,
        created_at: timestamp,
        updated_at: timestamp,
    };

    let technician = Technician::from_persisted(data.clone());

    ensure!(technician.id() == data.id);
    ensure!(technician.user_id() == data.user_id);
    ensure!(technician.specialization() == Specialization::Carpenter);
    ensure!(technician.experience_years() == 22);
    ensure!(technician.rating() == data.rating);
    ensure!(technician.total_jobs() == 57);
    Ok(())
}

#[rstest]
fn rating_replacement_keeps_latest_value(
    clock: DefaultClock,
    electrician: Result<Technician, TechnicianDomainError>,
) -> eyre::Result<()> {
    let mut technician = electrician?;
    let first = Rating::new(4.5)?;
    let second = Rating::new(2.5)?;

    technician.rate(first, &clock);
    technician.rate(second, &clock);

    ensure!(technician.rating() == second);
    Ok(())
}
