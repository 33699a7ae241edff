//! Conversions from catalog configuration records to runtime sizing types.

use esizer_config::{
    AircraftClassConfig, CellConfig, FleetPlaneConfig, MissionConfig, MotorConfig,
};
use esizer_mission::{Mission, Phase};
use esizer_powerplant::{BatteryCell, Motor, PowerplantError};
use thiserror::Error;

use crate::trend::{AircraftClass, HistoricalTrend, SimilarPlane, TrendError};

/// Errors surfaced when selecting or converting catalog entries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("motor '{0}' not found in catalog")]
    MotorNotFound(String),
    #[error("cell '{0}' not found in catalog")]
    CellNotFound(String),
    #[error("powerplant catalog has no motors")]
    NoMotors,
    #[error("powerplant catalog has no cells")]
    NoCells,
    #[error("cell specification rejected: {0}")]
    Cell(#[from] PowerplantError),
    #[error("reference fleet rejected: {0}")]
    Fleet(#[from] TrendError),
}

/// Build a runtime mission from a manifest, expanding phase repeats.
pub fn mission_from_config(config: &MissionConfig) -> Mission {
    let mut mission = Mission::new(config.takeoff_mass_guess_kg, config.payload_kg);
    if let Some(ratio) = config.low_voltage_ratio {
        mission = mission.with_low_voltage_ratio(ratio);
    }

    let mut phases = Vec::new();
    for phase in &config.phases {
        let runtime = Phase::new(
            &phase.name,
            phase.final_speed_m_s,
            phase.lift_over_drag,
            phase.duration_s,
            phase.vertical_speed_m_s,
            phase.speed_change_m_s,
        );
        for _ in 0..phase.repeat.unwrap_or(1) {
            phases.push(runtime.clone());
        }
    }
    mission.add_phases(phases);
    mission
}

/// Convert a catalog motor record into the runtime representation.
pub fn motor_from_config(config: &MotorConfig) -> Motor {
    Motor {
        name: config.name.clone(),
        input_voltage_v: config.input_voltage_v,
        whole_chain_efficiency: config.whole_chain_efficiency,
        max_continuous_power_w: config.max_continuous_power_w,
    }
}

/// Convert a catalog cell record, normalizing its datasheet units.
pub fn cell_from_config(config: &CellConfig) -> Result<BatteryCell, CatalogError> {
    Ok(BatteryCell::from_datasheet(
        &config.name,
        config.nominal_cell_voltage_v,
        config.c_max_per_hour,
        config.cell_capacity_ah,
        config.specific_energy_wh_kg,
    )?)
}

/// Select a motor from the catalog by optional name, defaulting to the
/// first entry.
pub fn select_motor<'a>(
    configs: &'a [MotorConfig],
    requested: Option<&str>,
) -> Result<&'a MotorConfig, CatalogError> {
    if configs.is_empty() {
        return Err(CatalogError::NoMotors);
    }
    match requested {
        Some(name) => {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| CatalogError::MotorNotFound(name.to_string()))
        }
        None => Ok(&configs[0]),
    }
}

/// Select a battery cell from the catalog by optional name, defaulting to
/// the first entry.
pub fn select_cell<'a>(
    configs: &'a [CellConfig],
    requested: Option<&str>,
) -> Result<&'a CellConfig, CatalogError> {
    if configs.is_empty() {
        return Err(CatalogError::NoCells);
    }
    match requested {
        Some(name) => {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| CatalogError::CellNotFound(name.to_string()))
        }
        None => Ok(&configs[0]),
    }
}

/// Map a manifest class tag onto the runtime enum.
pub fn class_from_config(class: AircraftClassConfig) -> AircraftClass {
    match class {
        AircraftClassConfig::Trainer => AircraftClass::Trainer,
        AircraftClassConfig::EnduranceUav => AircraftClass::EnduranceUav,
        AircraftClassConfig::MotorGlider => AircraftClass::MotorGlider,
    }
}

/// Build the historical trend from fleet records, optionally restricted to
/// one airframe class.
pub fn trend_from_config(
    planes: &[FleetPlaneConfig],
    class: Option<AircraftClass>,
) -> Result<HistoricalTrend, CatalogError> {
    let mut trend = HistoricalTrend::new();
    let mut selected = Vec::new();
    for plane in planes {
        if let Some(wanted) = class {
            if class_from_config(plane.class) != wanted {
                continue;
            }
        }
        selected.push(SimilarPlane::new(
            plane.takeoff_mass_kg,
            plane.empty_mass_kg,
        )?);
    }
    trend.add_similar_planes(selected);
    Ok(trend)
}
