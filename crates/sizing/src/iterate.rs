//! Takeoff-mass fixed-point iteration.
//!
//! At a candidate takeoff mass, the pack sizing fixes how much of that mass
//! is battery; subtracting battery and payload leaves the empty mass
//! available for structure. The fleet trend says what empty mass a plane of
//! that takeoff mass needs. The loop shifts the takeoff mass by the gap
//! between the two until the relative error is inside tolerance.

use esizer_mission::Mission;
use esizer_powerplant::{BatteryCell, Motor};
use thiserror::Error;

use crate::battery::{BatteryError, size_battery_pack};
use crate::power::{PowerError, compute_phase_powers};
use crate::trend::{HistoricalTrend, TrendError};

/// Termination controls for the mass loop.
#[derive(Debug, Clone, Copy)]
pub struct IterationSettings {
    /// Signed relative empty-mass error at which the loop stops. An
    /// available mass already above requirement (negative error) stops
    /// immediately.
    pub acceptable_error: f64,
    /// Corrections allowed before the loop gives up.
    pub max_iterations: u32,
}

impl Default for IterationSettings {
    fn default() -> Self {
        Self {
            acceptable_error: 0.005,
            max_iterations: 100,
        }
    }
}

#[derive(Debug, Error)]
pub enum MassIterationError {
    #[error("phase power evaluation failed: {0}")]
    Power(#[from] PowerError),
    #[error("battery sizing failed: {0}")]
    Battery(#[from] BatteryError),
    #[error("weight trend fit failed: {0}")]
    Trend(#[from] TrendError),
    #[error("takeoff mass did not converge within {iterations} corrections")]
    NotConverged { iterations: u32 },
}

/// Converged mass budget.
#[derive(Debug, Clone, Copy)]
pub struct MassIterationResult {
    pub iterated_empty_mass_kg: f64,
    pub iterated_takeoff_mass_kg: f64,
    pub iterations: u32,
}

/// Iterate the mission's takeoff mass guess to a self-consistent value.
///
/// The guess is updated in place, so the mission leaves with the converged
/// takeoff mass (or, on failure, the last value tried).
pub fn converge(
    motor: &Motor,
    mission: &mut Mission,
    cell: &BatteryCell,
    trend: &HistoricalTrend,
    settings: IterationSettings,
) -> Result<MassIterationResult, MassIterationError> {
    // The fleet does not change inside the loop; fit once.
    let line = trend.fit()?;
    let mut iterations = 0;

    loop {
        let empty_mass_required_kg = line.empty_mass_required_kg(mission.takeoff_mass_guess_kg);
        let powers = compute_phase_powers(mission, mission.takeoff_mass_guess_kg)?;
        let pack = size_battery_pack(motor, mission, cell, &powers)?;
        let empty_mass_available_kg =
            mission.takeoff_mass_guess_kg - mission.payload_kg - pack.pack_mass_kg;

        let error = (empty_mass_available_kg - empty_mass_required_kg) / empty_mass_required_kg;
        if error <= settings.acceptable_error {
            return Ok(MassIterationResult {
                iterated_empty_mass_kg: empty_mass_available_kg,
                iterated_takeoff_mass_kg: mission.takeoff_mass_guess_kg,
                iterations,
            });
        }
        if iterations >= settings.max_iterations {
            return Err(MassIterationError::NotConverged { iterations });
        }

        mission.takeoff_mass_guess_kg += empty_mass_required_kg - empty_mass_available_kg;
        iterations += 1;
    }
}
