use electric_aircraft_sizer::mission::{Mission, Phase};
use electric_aircraft_sizer::powerplant::{BatteryCell, Motor};
use electric_aircraft_sizer::sizing::{
    HistoricalTrend, IterationSettings, MassIterationError, SimilarPlane, compute_phase_powers,
    converge, size_battery_pack,
};

fn park_480() -> Motor {
    Motor {
        name: "Park 480".to_string(),
        input_voltage_v: 11.1,
        whole_chain_efficiency: 0.8,
        max_continuous_power_w: 110.0,
    }
}

fn lipo_500() -> BatteryCell {
    BatteryCell::from_datasheet("LiPo 500 mAh", 3.7, 25.0, 0.5, 200.0).expect("cell")
}

fn endurance_mission() -> Mission {
    let mut mission = Mission::new(12.5, 2.0);
    mission.add_phases([
        Phase::new("taxi", 3.0, 15.0, 30.0, 0.0, 3.0),
        Phase::new("takeoff", 13.4, 15.0, 10.0, 0.0, 13.4),
        Phase::new("climb", 22.4, 10.0, 48.0, 2.54, 9.0),
        Phase::new("endurance", 22.4, 20.0, 1800.0, 0.0, 0.0),
        Phase::new("descent", 13.4, 15.0, 48.0, -2.54, -9.0),
        Phase::new("pattern", 13.4, 10.0, 60.0, 0.0, 0.0),
        Phase::new("land", 0.0, 5.0, 15.0, -1.0, -13.4),
        Phase::new("taxi", 3.0, 15.0, 30.0, 0.0, 3.0),
    ]);
    mission
}

fn reference_fleet() -> HistoricalTrend {
    let mut trend = HistoricalTrend::new();
    trend.add_similar_planes(
        [
            (1.2, 0.9),
            (2.5, 1.8),
            (5.0, 3.4),
            (8.0, 5.2),
            (12.0, 7.4),
            (20.0, 11.5),
            (25.0, 13.8),
        ]
        .map(|(takeoff, empty)| SimilarPlane::new(takeoff, empty).expect("plane")),
    );
    trend
}

#[test]
fn converged_masses_satisfy_the_error_criterion() {
    let motor = park_480();
    let cell = lipo_500();
    let trend = reference_fleet();
    let mut mission = endurance_mission();

    let settings = IterationSettings::default();
    let result = converge(&motor, &mut mission, &cell, &trend, settings).expect("converge");

    assert!(result.iterations > 0);
    assert!(result.iterated_takeoff_mass_kg > 0.0);
    assert!(result.iterated_empty_mass_kg > 0.0);
    // The mission leaves the call carrying the converged takeoff mass.
    assert!(
        (mission.takeoff_mass_guess_kg - result.iterated_takeoff_mass_kg).abs() < 1e-12
    );

    // Re-derive both sides of the mass budget at the converged point.
    let line = trend.fit().expect("fit");
    let required = line.empty_mass_required_kg(result.iterated_takeoff_mass_kg);
    let powers =
        compute_phase_powers(&mission, result.iterated_takeoff_mass_kg).expect("powers");
    let pack = size_battery_pack(&motor, &mission, &cell, &powers).expect("pack");
    let available = result.iterated_takeoff_mass_kg - mission.payload_kg - pack.pack_mass_kg;
    assert!(
        (available - required) / required <= settings.acceptable_error,
        "available = {}, required = {}",
        available,
        required
    );
    assert!((available - result.iterated_empty_mass_kg).abs() < 1e-9);
}

#[test]
fn reconverging_a_converged_mission_is_a_no_op() {
    let motor = park_480();
    let cell = lipo_500();
    let trend = reference_fleet();
    let mut mission = endurance_mission();

    let first = converge(&motor, &mut mission, &cell, &trend, IterationSettings::default())
        .expect("first");
    let second = converge(&motor, &mut mission, &cell, &trend, IterationSettings::default())
        .expect("second");

    assert_eq!(second.iterations, 0);
    assert!(
        (second.iterated_takeoff_mass_kg - first.iterated_takeoff_mass_kg).abs() < 1e-9
    );
    assert!((second.iterated_empty_mass_kg - first.iterated_empty_mass_kg).abs() < 1e-9);
}

#[test]
fn exhausting_the_iteration_budget_is_a_distinct_error() {
    let motor = park_480();
    let cell = lipo_500();
    let trend = reference_fleet();
    let mut mission = endurance_mission();

    let starved = IterationSettings {
        acceptable_error: 0.005,
        max_iterations: 0,
    };
    let err = converge(&motor, &mut mission, &cell, &trend, starved).unwrap_err();
    assert!(matches!(err, MassIterationError::NotConverged { iterations: 0 }));
}

#[test]
fn upstream_failures_propagate_through_the_loop() {
    let motor = park_480();
    let cell = lipo_500();
    let trend = reference_fleet();

    let mut empty = Mission::new(12.5, 2.0);
    let err = converge(&motor, &mut empty, &cell, &trend, IterationSettings::default())
        .unwrap_err();
    assert!(matches!(err, MassIterationError::Power(_)));

    let mut mission = endurance_mission();
    let mut lone_plane = HistoricalTrend::new();
    lone_plane.add_similar_planes([SimilarPlane::new(5.0, 3.4).expect("plane")]);
    let err = converge(&motor, &mut mission, &cell, &lone_plane, IterationSettings::default())
        .unwrap_err();
    assert!(matches!(err, MassIterationError::Trend(_)));
}

#[test]
fn an_oversized_guess_shrinks_toward_the_trend() {
    let motor = park_480();
    let cell = lipo_500();
    let trend = reference_fleet();

    // Start well above the fleet: the surplus structure margin pulls the
    // guess down until the trend matches.
    let mut mission = endurance_mission();
    mission.takeoff_mass_guess_kg = 40.0;
    let result = converge(&motor, &mut mission, &cell, &trend, IterationSettings::default())
        .expect("converge");
    assert!(result.iterated_takeoff_mass_kg < 40.0);
}
