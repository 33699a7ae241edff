use electric_aircraft_sizer::pattern::{PatternError, PatternRequest, build_pattern};

/// The 163 m East Bay field in calm air, the original driver case.
fn east_bay() -> PatternRequest {
    PatternRequest {
        field_length_m: 163.0,
        glide_slope_deg: 3.0,
        pattern_altitude_m: 30.0,
        climb_rate_m_s: 2.54,
        turn_radius_m: 75.0,
        approach_speed_m_s: 13.4,
        headwind_m_s: 0.0,
    }
}

#[test]
fn east_bay_leg_lengths() {
    let shape = build_pattern(&east_bay()).expect("pattern");
    assert!((shape.final_length_m - 200.7245).abs() < 1e-3, "final = {}", shape.final_length_m);
    assert!((shape.initial_climb_length_m - 108.7789).abs() < 1e-3);
    assert!((shape.pattern_diameter_m - 200.7245).abs() < 1e-3);
    assert!((shape.downwind_length_m - 391.0034).abs() < 1e-3);
    assert!((shape.descent_length_m - 787.3692).abs() < 1e-3);
    assert!((shape.before_runway_length_m - 301.0868).abs() < 1e-3);
    assert!((shape.after_runway_length_m - 290.6412).abs() < 1e-3);
}

#[test]
fn east_bay_waypoints_sit_on_the_glide_slope() {
    let shape = build_pattern(&east_bay()).expect("pattern");
    let w = &shape.waypoints;

    // Threshold crossed at the height a 3 degree slope gives over a
    // quarter-length touchdown.
    assert!((w.threshold_crossing[2] - 2.1356).abs() < 1e-3);
    assert_eq!(w.touchdown, [0.25 * 163.0, 0.0, 0.0]);
    assert_eq!(w.liftoff, [0.5 * 163.0, 0.0, 0.0]);

    // Final starts a 15 second leg out, descending at the slope.
    assert!((w.final_start[0] + 200.7245).abs() < 1e-3);
    assert!((w.final_start[2] - 12.6551).abs() < 1e-3);

    // Base turn entry mirrors the final leg out to the pattern side and
    // keeps descending around the half circle.
    assert!((w.base_turn_start[1] - 200.7245).abs() < 1e-3);
    assert!((w.base_turn_start[2] - 29.1792).abs() < 1e-3);

    // Downwind is flown level at pattern altitude.
    assert_eq!(w.descent_start[2], 30.0);
    assert_eq!(w.abeam_threshold[2], 30.0);
    assert_eq!(w.downwind_entry[2], 30.0);
    assert!((w.descent_start[0] - 29.8728).abs() < 1e-3);
}

#[test]
fn tight_turns_let_the_fifteen_second_final_stand() {
    // Half the 15 second final (about 100 m) clears a 40 m radius, so the
    // final is not stretched by the turn geometry.
    let mut request = east_bay();
    request.turn_radius_m = 40.0;
    let shape = build_pattern(&request).expect("pattern");
    assert!((shape.final_length_m - 200.7245).abs() < 1e-3);
}

#[test]
fn wide_turns_stretch_the_final() {
    let mut request = east_bay();
    request.turn_radius_m = 120.0;
    let shape = build_pattern(&request).expect("pattern");
    // The minimum radius governs: the final becomes two turn radii.
    assert!((shape.final_length_m - 240.0).abs() < 1e-9);
}

#[test]
fn headwind_shortens_the_final() {
    let calm = build_pattern(&east_bay()).expect("calm");
    let mut windy_request = east_bay();
    windy_request.headwind_m_s = 5.0;
    let windy = build_pattern(&windy_request).expect("windy");
    assert!(windy.final_length_m < calm.final_length_m);
}

#[test]
fn impossible_fields_are_rejected() {
    let mut request = east_bay();
    request.headwind_m_s = 13.4;
    let err = build_pattern(&request).unwrap_err();
    assert!(matches!(err, PatternError::ExcessiveHeadwind));

    let mut request = east_bay();
    request.climb_rate_m_s = 0.0;
    let err = build_pattern(&request).unwrap_err();
    assert!(matches!(err, PatternError::ClimbRateOutOfRange));

    let mut request = east_bay();
    request.glide_slope_deg = 0.0;
    let err = build_pattern(&request).unwrap_err();
    assert!(matches!(err, PatternError::NonPositiveGlideSlope));
}
