//! Wing-loading and power-loading matching constraints.
//!
//! The matching chart plots candidate wing loadings against the power per
//! unit weight each requirement demands. The stall requirement caps wing
//! loading outright; climb and cruise each put a floor under installed
//! power. A design point is feasible where it sits below the stall cap and
//! above every power floor.

use esizer_core::constants::G0;
use thiserror::Error;

// Quadratic fit of atmospheric density below roughly 3 km, good enough for
// the airfields these aircraft operate from.
const DENSITY_QUADRATIC: f64 = 2.490e-9;
const DENSITY_LINEAR: f64 = -1.05332443e-4;
const DENSITY_CONSTANT: f64 = 1.211228027786;

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("lift-over-drag ratios must be positive")]
    NonPositiveLiftOverDrag,
    #[error("wing loading sweep range must be positive and ascending")]
    InvalidSweepRange,
}

/// Design speeds and ratios the chart constraints are drawn from.
#[derive(Debug, Clone)]
pub struct MatchingRequest {
    /// Altitude the stall requirement applies at (m).
    pub stall_altitude_m: f64,
    /// Maximum lift coefficient in the clean configuration.
    pub max_clean_cl: f64,
    /// Power-off stall speed requirement (m/s).
    pub stall_speed_m_s: f64,
    pub climb_speed_m_s: f64,
    pub climb_lift_over_drag: f64,
    pub climb_rate_m_s: f64,
    pub cruise_speed_m_s: f64,
    pub cruise_lift_over_drag: f64,
}

/// One sampled column of the matching chart.
#[derive(Debug, Clone)]
pub struct MatchingPoint {
    pub wing_loading_n_m2: f64,
    pub stall_limit_n_m2: f64,
    pub climb_power_to_weight_w_n: f64,
    pub cruise_power_to_weight_w_n: f64,
    pub feasible: bool,
}

/// Atmospheric density at altitude (kg/m³), from the quadratic fit.
pub fn air_density_kg_m3(altitude_m: f64) -> f64 {
    DENSITY_QUADRATIC * altitude_m * altitude_m + DENSITY_LINEAR * altitude_m + DENSITY_CONSTANT
}

/// Highest wing loading that still meets the stall speed requirement (N/m²).
pub fn stall_wing_loading_n_m2(
    altitude_m: f64,
    max_clean_cl: f64,
    power_off_stall_speed_m_s: f64,
) -> f64 {
    power_off_stall_speed_m_s.powi(2) * air_density_kg_m3(altitude_m) * max_clean_cl / 2.0
}

/// Power per unit weight to hold a speed against drag while climbing (W/N).
pub fn power_to_weight_w_n(speed_m_s: f64, lift_over_drag: f64, vertical_speed_m_s: f64) -> f64 {
    speed_m_s / lift_over_drag + vertical_speed_m_s
}

/// Power per unit mass for the same condition (W/kg).
pub fn power_to_mass_w_kg(speed_m_s: f64, lift_over_drag: f64, vertical_speed_m_s: f64) -> f64 {
    G0 * power_to_weight_w_n(speed_m_s, lift_over_drag, vertical_speed_m_s)
}

/// Sample the chart across a wing-loading range, inclusive of both ends.
pub fn sweep(
    request: &MatchingRequest,
    min_wing_loading_n_m2: f64,
    max_wing_loading_n_m2: f64,
    steps: usize,
) -> Result<Vec<MatchingPoint>, MatchingError> {
    if request.climb_lift_over_drag <= 0.0 || request.cruise_lift_over_drag <= 0.0 {
        return Err(MatchingError::NonPositiveLiftOverDrag);
    }
    if !(min_wing_loading_n_m2 > 0.0 && max_wing_loading_n_m2 > min_wing_loading_n_m2)
        || steps == 0
    {
        return Err(MatchingError::InvalidSweepRange);
    }

    let stall_limit = stall_wing_loading_n_m2(
        request.stall_altitude_m,
        request.max_clean_cl,
        request.stall_speed_m_s,
    );
    let climb_floor = power_to_weight_w_n(
        request.climb_speed_m_s,
        request.climb_lift_over_drag,
        request.climb_rate_m_s,
    );
    let cruise_floor =
        power_to_weight_w_n(request.cruise_speed_m_s, request.cruise_lift_over_drag, 0.0);

    let span = max_wing_loading_n_m2 - min_wing_loading_n_m2;
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let wing_loading = min_wing_loading_n_m2 + span * i as f64 / steps as f64;
        points.push(MatchingPoint {
            wing_loading_n_m2: wing_loading,
            stall_limit_n_m2: stall_limit,
            climb_power_to_weight_w_n: climb_floor,
            cruise_power_to_weight_w_n: cruise_floor,
            feasible: wing_loading <= stall_limit,
        });
    }
    Ok(points)
}
