//! Airfield traffic-pattern geometry.
//!
//! Lays out the rectangular pattern of FAA Advisory Circular 90-66B
//! (non-towered airport operations) around a runway: climb-out, crosswind,
//! downwind, a half-circle base turn, and final. Coordinates are in metres
//! relative to the runway threshold, x along the runway in the takeoff
//! direction, y toward the pattern side, z up.

use esizer_core::units::degrees_to_radians;
use std::f64::consts::PI;
use thiserror::Error;

/// A point of the pattern in threshold coordinates (m).
pub type Waypoint = [f64; 3];

/// Airfield and aircraft inputs the pattern is shaped around.
#[derive(Debug, Clone)]
pub struct PatternRequest {
    /// Total runway length (m).
    pub field_length_m: f64,
    /// Approach glide slope (degrees).
    pub glide_slope_deg: f64,
    /// Pattern altitude above the field (m).
    pub pattern_altitude_m: f64,
    /// Aircraft climb rate (m/s).
    pub climb_rate_m_s: f64,
    /// Minimum turning radius of the aircraft (m).
    pub turn_radius_m: f64,
    /// Approach and pattern speed (m/s).
    pub approach_speed_m_s: f64,
    /// Headwind along the runway (m/s).
    pub headwind_m_s: f64,
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("headwind cannot equal or exceed the approach speed")]
    ExcessiveHeadwind,
    #[error("climb rate must be positive and below the approach speed")]
    ClimbRateOutOfRange,
    #[error("glide slope must be positive")]
    NonPositiveGlideSlope,
}

/// The pattern's corner points, named by role.
#[derive(Debug, Clone)]
pub struct PatternWaypoints {
    /// Crossing the threshold on final, at the glide-slope height.
    pub threshold_crossing: Waypoint,
    /// Touchdown, assumed a quarter of the way down the runway.
    pub touchdown: Waypoint,
    /// Liftoff, assumed at the runway midpoint.
    pub liftoff: Waypoint,
    /// End of the straight climb at 70% of pattern altitude.
    pub climbout_end: Waypoint,
    /// Turning onto the downwind leg.
    pub downwind_entry: Waypoint,
    /// Abeam the threshold on downwind.
    pub abeam_threshold: Waypoint,
    /// Where the descent begins on downwind.
    pub descent_start: Waypoint,
    /// Entering the half-circle base turn.
    pub base_turn_start: Waypoint,
    /// Rolling out onto final.
    pub final_start: Waypoint,
}

/// Pattern waypoints plus the leg lengths flown between them.
#[derive(Debug, Clone)]
pub struct PatternShape {
    pub waypoints: PatternWaypoints,
    pub initial_climb_length_m: f64,
    pub descent_length_m: f64,
    pub final_length_m: f64,
    pub downwind_length_m: f64,
    pub pattern_diameter_m: f64,
    pub before_runway_length_m: f64,
    pub after_runway_length_m: f64,
}

/// Shape the pattern an aircraft can fly at the given field.
pub fn build_pattern(request: &PatternRequest) -> Result<PatternShape, PatternError> {
    if request.headwind_m_s >= request.approach_speed_m_s {
        return Err(PatternError::ExcessiveHeadwind);
    }
    if !(request.climb_rate_m_s > 0.0 && request.climb_rate_m_s < request.approach_speed_m_s) {
        return Err(PatternError::ClimbRateOutOfRange);
    }
    if request.glide_slope_deg <= 0.0 {
        return Err(PatternError::NonPositiveGlideSlope);
    }

    let glide_slope = degrees_to_radians(request.glide_slope_deg);
    let field = request.field_length_m;
    let altitude = request.pattern_altitude_m;

    // Touchdown at a quarter of the runway, liftoff at the midpoint.
    let threshold_crossing = [0.0, 0.0, 0.25 * field * glide_slope.tan()];
    let touchdown = [0.25 * field, 0.0, 0.0];
    let liftoff = [0.5 * field, 0.0, 0.0];

    let climb_time = 0.7 * altitude / request.climb_rate_m_s;
    let ground_speed =
        (request.approach_speed_m_s.powi(2) - request.climb_rate_m_s.powi(2)).sqrt()
            - request.headwind_m_s;
    let climbout_end = [climb_time * ground_speed + 0.5 * field, 0.0, 0.7 * altitude];

    let final_start = place_final_start(request, glide_slope, threshold_crossing[2]);

    // The base turn is a half circle whose radius is half the final leg,
    // from the 45 degree geometry; the aircraft keeps descending along it.
    let base_radius = -final_start[0] / 2.0;
    let base_turn_alt = PI * base_radius * glide_slope.tan() + final_start[2];
    let base_turn_start = [final_start[0], -final_start[0], base_turn_alt];

    let descent_run = altitude / glide_slope.tan();
    let downwind_to_base = descent_run - 0.25 * field + final_start[0] - base_radius;
    let descent_start = [
        base_turn_start[0] + downwind_to_base,
        base_turn_start[1],
        altitude,
    ];
    let abeam_threshold = [0.0, descent_start[1], altitude];
    let downwind_entry = [climbout_end[0], abeam_threshold[1], abeam_threshold[2]];

    let descent_length_m = (descent_start[0] - base_turn_start[0])
        + PI * base_turn_start[1] / 2.0
        + (-final_start[0])
        + touchdown[0];

    Ok(PatternShape {
        initial_climb_length_m: climbout_end[0] - liftoff[0],
        descent_length_m,
        final_length_m: -final_start[0],
        downwind_length_m: climbout_end[0] - base_turn_start[0],
        pattern_diameter_m: base_turn_start[1],
        before_runway_length_m: -1.5 * final_start[0],
        after_runway_length_m: climbout_end[0] - final_start[0] / 2.0,
        waypoints: PatternWaypoints {
            threshold_crossing,
            touchdown,
            liftoff,
            climbout_end,
            downwind_entry,
            abeam_threshold,
            descent_start,
            base_turn_start,
            final_start,
        },
    })
}

/// Position where the aircraft rolls out onto final.
///
/// A 15 second final at approach speed is preferred. It stretches when the
/// descent would otherwise have to start before the abeam point, and when
/// the aircraft's minimum turning radius cannot fit the 45 degree base
/// geometry the radius governs instead.
fn place_final_start(
    request: &PatternRequest,
    glide_slope: f64,
    threshold_height: f64,
) -> Waypoint {
    let fifteen_second_final =
        15.0 * request.approach_speed_m_s * glide_slope.cos() - request.headwind_m_s;
    let descent_run = request.pattern_altitude_m / glide_slope.tan();

    if fifteen_second_final / 2.0 >= request.turn_radius_m {
        // Base turn radius is half the final leg.
        let downwind_to_base = descent_run
            - 0.25 * request.field_length_m
            - fifteen_second_final
            - PI * fifteen_second_final / 2.0;
        if fifteen_second_final >= downwind_to_base {
            [
                -fifteen_second_final,
                0.0,
                threshold_height + glide_slope.tan() * fifteen_second_final,
            ]
        } else {
            [
                -downwind_to_base,
                0.0,
                threshold_height + glide_slope.tan() * downwind_to_base,
            ]
        }
    } else {
        // Minimum turning radius governs the base turn.
        let downwind_to_base = descent_run
            - 0.25 * request.field_length_m
            - fifteen_second_final
            - PI * request.turn_radius_m;
        if 2.0 * request.turn_radius_m >= downwind_to_base {
            [
                -2.0 * request.turn_radius_m,
                0.0,
                threshold_height + glide_slope.tan() * 2.0 * request.turn_radius_m,
            ]
        } else {
            [
                -downwind_to_base,
                0.0,
                threshold_height + glide_slope.tan() * downwind_to_base,
            ]
        }
    }
}
