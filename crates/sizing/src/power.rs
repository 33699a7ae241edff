//! Per-phase power demand model.
//!
//! Each phase's demand splits into an energy-state term (kinetic plus
//! potential change averaged over the phase) and an aerodynamic term (drag
//! at the phase's fastest airspeed, via the lift-over-drag ratio). Phases
//! that shed more energy than drag absorbs draw nothing from the pack;
//! there is no regenerative path.

use esizer_core::constants::G0;
use esizer_mission::{Mission, Phase};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowerError {
    #[error("mission has no phases to evaluate")]
    EmptyMission,
    #[error("phase '{0}' has a non-positive duration")]
    NonPositiveDuration(String),
    #[error("phase '{0}' has a non-positive lift-over-drag ratio")]
    NonPositiveLiftOverDrag(String),
}

/// Power demand of every distinct phase of one mission, evaluated at a
/// single takeoff mass.
///
/// Existence of a table proves the power model ran: the battery sizing
/// consumes it directly instead of re-deriving powers phase by phase.
#[derive(Debug, Clone)]
pub struct PhasePowerTable {
    entries: Vec<PhasePowerEntry>,
    mission_energy_j: f64,
}

/// One distinct phase paired with its required power.
#[derive(Debug, Clone)]
pub struct PhasePowerEntry {
    pub phase: Phase,
    pub required_power_w: f64,
}

/// Power one phase demands at the given mass (W).
pub fn required_power_w(phase: &Phase, mass_kg: f64) -> Result<f64, PowerError> {
    if phase.duration_s <= 0.0 {
        return Err(PowerError::NonPositiveDuration(phase.name.clone()));
    }
    if phase.lift_over_drag <= 0.0 {
        return Err(PowerError::NonPositiveLiftOverDrag(phase.name.clone()));
    }

    let initial_speed = phase.initial_speed_m_s();
    let kinetic_delta_j =
        (mass_kg / 2.0) * (phase.final_speed_m_s.powi(2) - initial_speed.powi(2));
    let potential_delta_j = G0 * mass_kg * phase.duration_s * phase.vertical_speed_m_s;
    let energy_state_power_w = (kinetic_delta_j + potential_delta_j) / phase.duration_s;
    let aerodynamic_power_w = G0 * mass_kg * phase.peak_speed_m_s() / phase.lift_over_drag;

    Ok((energy_state_power_w + aerodynamic_power_w).max(0.0))
}

/// Evaluate the power model over a whole mission at one takeoff mass.
///
/// The table covers the distinct phases; the stored mission energy counts
/// every occurrence, so repeated phases are paid for each time they fly.
pub fn compute_phase_powers(
    mission: &Mission,
    mass_kg: f64,
) -> Result<PhasePowerTable, PowerError> {
    if mission.unique_phases().is_empty() {
        return Err(PowerError::EmptyMission);
    }

    let mut entries = Vec::with_capacity(mission.unique_phases().len());
    for phase in mission.unique_phases() {
        let power = required_power_w(phase, mass_kg)?;
        entries.push(PhasePowerEntry {
            phase: phase.clone(),
            required_power_w: power,
        });
    }

    let mut mission_energy_j = 0.0;
    for phase in mission.all_phases() {
        if let Some(entry) = entries.iter().find(|entry| &entry.phase == phase) {
            mission_energy_j += entry.required_power_w * phase.duration_s;
        }
    }

    Ok(PhasePowerTable {
        entries,
        mission_energy_j,
    })
}

impl PhasePowerTable {
    /// Entries in first-seen phase order.
    pub fn entries(&self) -> &[PhasePowerEntry] {
        &self.entries
    }

    /// Largest single-phase demand (W). Demands are floored at zero, so the
    /// peak is never negative.
    pub fn peak_power_w(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.required_power_w)
            .fold(0.0, f64::max)
    }

    /// Demand of one phase, if it belongs to the table's mission.
    pub fn power_for(&self, phase: &Phase) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| &entry.phase == phase)
            .map(|entry| entry.required_power_w)
    }

    /// Total electrical energy over every phase occurrence (J).
    pub fn mission_energy_j(&self) -> f64 {
        self.mission_energy_j
    }
}
