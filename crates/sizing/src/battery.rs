//! Battery pack sizing against the peak-power and endurance constraints.
//!
//! Series count comes from matching the motor's input voltage; the parallel
//! count is the worse of two independent demands: delivering the mission's
//! peak power through the derated pack, and storing enough energy to fly
//! every phase occurrence. Both demands round up to whole strings before
//! the comparison, since a fractional cell satisfies neither.

use esizer_mission::Mission;
use esizer_powerplant::{BatteryCell, Motor};
use thiserror::Error;

use crate::power::PhasePowerTable;

#[derive(Debug, Error)]
pub enum BatteryError {
    #[error("motor input voltage must be positive")]
    NonPositiveMotorVoltage,
    #[error("whole-chain efficiency must lie in (0, 1]")]
    EfficiencyOutOfRange,
    #[error("low-voltage derating ratio must lie in (0, 1]")]
    LowVoltageRatioOutOfRange,
}

/// Pack layout satisfying both sizing branches.
#[derive(Debug, Clone)]
pub struct BatteryPackSizing {
    pub number_in_series: u32,
    pub number_in_parallel: u32,
    /// Parallel strings the peak-power branch alone would need.
    pub number_in_parallel_power: u32,
    /// Parallel strings the endurance branch alone would need.
    pub number_in_parallel_endurance: u32,
    pub number_of_cells: u32,
    pub pack_mass_kg: f64,
}

/// Size a pack for one mission's power table.
pub fn size_battery_pack(
    motor: &Motor,
    mission: &Mission,
    cell: &BatteryCell,
    powers: &PhasePowerTable,
) -> Result<BatteryPackSizing, BatteryError> {
    if motor.input_voltage_v <= 0.0 {
        return Err(BatteryError::NonPositiveMotorVoltage);
    }
    if !(motor.whole_chain_efficiency > 0.0 && motor.whole_chain_efficiency <= 1.0) {
        return Err(BatteryError::EfficiencyOutOfRange);
    }
    if !(mission.low_voltage_ratio > 0.0 && mission.low_voltage_ratio <= 1.0) {
        return Err(BatteryError::LowVoltageRatioOutOfRange);
    }

    let number_in_series = (motor.input_voltage_v / cell.nominal_cell_voltage_v).ceil() as u32;

    // Peak power must still be available near the low-voltage cutoff.
    let derated_pack_voltage_v =
        number_in_series as f64 * cell.nominal_cell_voltage_v * mission.low_voltage_ratio;
    let string_peak_power_w = cell.c_max_per_s
        * cell.cell_capacity_a_s
        * motor.whole_chain_efficiency
        * derated_pack_voltage_v;
    let number_in_parallel_power = (powers.peak_power_w() / string_peak_power_w).ceil() as u32;

    let usable_cell_energy_j = cell.cell_energy_j() * motor.whole_chain_efficiency;
    let number_in_parallel_endurance =
        (powers.mission_energy_j() / usable_cell_energy_j).ceil() as u32;

    let number_in_parallel = number_in_parallel_power.max(number_in_parallel_endurance);
    let number_of_cells = number_in_series * number_in_parallel;

    Ok(BatteryPackSizing {
        number_in_series,
        number_in_parallel,
        number_in_parallel_power,
        number_in_parallel_endurance,
        number_of_cells,
        pack_mass_kg: number_of_cells as f64 * cell.cell_mass_kg,
    })
}
