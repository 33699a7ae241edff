//! Electric powerplant models.
//!
//! The motor is a static specification of the whole drive chain (battery
//! terminals through to the propeller). Battery cells are specified in
//! datasheet units and normalized to SI seconds once, at construction, so
//! downstream sizing never mixes hour-based and second-based quantities.

use esizer_core::units::{
    ampere_hours_to_ampere_seconds, per_hour_to_per_second, watt_hours_to_joules,
};
use thiserror::Error;

/// Motor and drive chain specification.
#[derive(Debug, Clone)]
pub struct Motor {
    pub name: String,
    /// Nominal input voltage the pack must supply (V).
    pub input_voltage_v: f64,
    /// Efficiency of the whole chain from pack terminals to thrust.
    pub whole_chain_efficiency: f64,
    /// Continuous shaft power rating (W).
    pub max_continuous_power_w: f64,
}

#[derive(Debug, Error)]
pub enum PowerplantError {
    #[error("cell voltage must be positive")]
    NonPositiveCellVoltage,
    #[error("cell C-rate must be positive")]
    NonPositiveCRate,
    #[error("cell capacity must be positive")]
    NonPositiveCapacity,
    #[error("cell specific energy density must be positive")]
    NonPositiveEnergyDensity,
}

/// A battery cell specification, held in SI units.
///
/// Construct through [`BatteryCell::from_datasheet`]; the stored fields are
/// already converted (C-rate per second, capacity in coulombs, specific
/// energy in J/kg) and the per-cell mass is derived from capacity, voltage,
/// and specific energy.
#[derive(Debug, Clone)]
pub struct BatteryCell {
    pub name: String,
    pub nominal_cell_voltage_v: f64,
    pub c_max_per_s: f64,
    pub cell_capacity_a_s: f64,
    pub specific_energy_j_kg: f64,
    pub cell_mass_kg: f64,
}

impl BatteryCell {
    /// Build a cell from datasheet units: volts, hourly C-rate, ampere-hours,
    /// and watt-hours per kilogram.
    pub fn from_datasheet(
        name: &str,
        nominal_cell_voltage_v: f64,
        c_max_per_hour: f64,
        cell_capacity_ah: f64,
        specific_energy_wh_kg: f64,
    ) -> Result<Self, PowerplantError> {
        if nominal_cell_voltage_v <= 0.0 {
            return Err(PowerplantError::NonPositiveCellVoltage);
        }
        if c_max_per_hour <= 0.0 {
            return Err(PowerplantError::NonPositiveCRate);
        }
        if cell_capacity_ah <= 0.0 {
            return Err(PowerplantError::NonPositiveCapacity);
        }
        if specific_energy_wh_kg <= 0.0 {
            return Err(PowerplantError::NonPositiveEnergyDensity);
        }

        let cell_capacity_a_s = ampere_hours_to_ampere_seconds(cell_capacity_ah);
        let specific_energy_j_kg = watt_hours_to_joules(specific_energy_wh_kg);
        Ok(Self {
            name: name.to_string(),
            nominal_cell_voltage_v,
            c_max_per_s: per_hour_to_per_second(c_max_per_hour),
            cell_capacity_a_s,
            specific_energy_j_kg,
            cell_mass_kg: cell_capacity_a_s * nominal_cell_voltage_v / specific_energy_j_kg,
        })
    }

    /// Energy stored in one cell at nominal voltage (J).
    pub fn cell_energy_j(&self) -> f64 {
        self.nominal_cell_voltage_v * self.cell_capacity_a_s
    }
}
