use electric_aircraft_sizer::mission::{Mission, Phase};
use electric_aircraft_sizer::sizing::power::{
    PowerError, compute_phase_powers, required_power_w,
};

const REFERENCE_MASS_KG: f64 = 12.5;

fn climb_phase() -> Phase {
    Phase::new("climb", 22.4, 10.0, 48.0, 2.54, 9.0)
}

#[test]
fn climb_power_splits_into_energy_state_and_drag() {
    let power = required_power_w(&climb_phase(), REFERENCE_MASS_KG).expect("climb power");
    assert!((power - 627.9004625).abs() < 1e-6, "climb = {}", power);
}

#[test]
fn steady_phase_is_pure_drag() {
    // No speed change, no vertical speed: only the aerodynamic term remains.
    let endurance = Phase::new("endurance", 22.4, 20.0, 1800.0, 0.0, 0.0);
    let power = required_power_w(&endurance, REFERENCE_MASS_KG).expect("endurance power");
    let drag_only = 9.80665 * REFERENCE_MASS_KG * 22.4 / 20.0;
    assert!((power - drag_only).abs() < 1e-9, "endurance = {}", power);
}

#[test]
fn descent_recovery_floors_at_zero() {
    let descent = Phase::new("descent", 13.4, 15.0, 48.0, -2.54, -9.0);
    let power = required_power_w(&descent, REFERENCE_MASS_KG).expect("descent power");
    assert_eq!(power, 0.0);
}

#[test]
fn landing_deceleration_still_draws_power() {
    // Drag on the way in beats the recovered kinetic and potential energy.
    let land = Phase::new("land", 0.0, 5.0, 15.0, -1.0, -13.4);
    let power = required_power_w(&land, REFERENCE_MASS_KG).expect("land power");
    assert!((power - 131.12298333333337).abs() < 1e-6, "land = {}", power);
}

#[test]
fn decelerating_phase_uses_entry_speed_for_drag() {
    // Entry at 22.4 m/s, exit at 13.4 m/s: drag is evaluated at entry.
    let descent = Phase::new("descent", 13.4, 15.0, 48.0, 0.0, -9.0);
    assert!((descent.initial_speed_m_s() - 22.4).abs() < 1e-12);
    assert!((descent.peak_speed_m_s() - 22.4).abs() < 1e-12);

    let accel = Phase::new("takeoff", 13.4, 15.0, 10.0, 0.0, 13.4);
    assert!((accel.peak_speed_m_s() - 13.4).abs() < 1e-12);
}

#[test]
fn power_grows_with_mass() {
    let at_light = required_power_w(&climb_phase(), 10.0).expect("light");
    let at_heavy = required_power_w(&climb_phase(), 14.0).expect("heavy");
    assert!(at_heavy > at_light);
}

#[test]
fn zero_duration_is_rejected() {
    let broken = Phase::new("broken", 10.0, 12.0, 0.0, 0.0, 0.0);
    let err = required_power_w(&broken, REFERENCE_MASS_KG).unwrap_err();
    assert!(matches!(err, PowerError::NonPositiveDuration(name) if name == "broken"));
}

#[test]
fn non_positive_lift_over_drag_is_rejected() {
    let broken = Phase::new("brick", 10.0, 0.0, 20.0, 0.0, 0.0);
    let err = required_power_w(&broken, REFERENCE_MASS_KG).unwrap_err();
    assert!(matches!(err, PowerError::NonPositiveLiftOverDrag(name) if name == "brick"));
}

#[test]
fn empty_mission_is_rejected() {
    let mission = Mission::new(REFERENCE_MASS_KG, 2.0);
    let err = compute_phase_powers(&mission, REFERENCE_MASS_KG).unwrap_err();
    assert!(matches!(err, PowerError::EmptyMission));
}

#[test]
fn table_covers_unique_phases_and_reports_peak() {
    let mut mission = Mission::new(REFERENCE_MASS_KG, 2.0);
    mission.add_phases([
        Phase::new("taxi", 3.0, 15.0, 30.0, 0.0, 3.0),
        climb_phase(),
        Phase::new("taxi", 3.0, 15.0, 30.0, 0.0, 3.0),
    ]);

    let table = compute_phase_powers(&mission, REFERENCE_MASS_KG).expect("table");
    assert_eq!(table.entries().len(), 2);
    assert!((table.peak_power_w() - 627.9004625).abs() < 1e-6);

    let taxi_power = table
        .power_for(&mission.all_phases()[0])
        .expect("taxi in table");
    assert!((taxi_power - 26.391625).abs() < 1e-6);
    assert!(table.power_for(&Phase::new("other", 1.0, 1.0, 1.0, 0.0, 0.0)).is_none());
}

#[test]
fn repeated_phases_pay_energy_per_occurrence() {
    let taxi = Phase::new("taxi", 3.0, 15.0, 30.0, 0.0, 3.0);
    let mut once = Mission::new(REFERENCE_MASS_KG, 2.0);
    once.add_phases([taxi.clone(), climb_phase()]);
    let mut twice = Mission::new(REFERENCE_MASS_KG, 2.0);
    twice.add_phases([taxi.clone(), climb_phase(), taxi.clone()]);

    let table_once = compute_phase_powers(&once, REFERENCE_MASS_KG).expect("once");
    let table_twice = compute_phase_powers(&twice, REFERENCE_MASS_KG).expect("twice");
    let taxi_energy = table_once.power_for(&taxi).expect("taxi") * taxi.duration_s;
    assert!(
        (table_twice.mission_energy_j() - table_once.mission_energy_j() - taxi_energy).abs()
            < 1e-9
    );
    // The peak is unaffected by how often a phase flies.
    assert!((table_twice.peak_power_w() - table_once.peak_power_w()).abs() < 1e-12);
}
