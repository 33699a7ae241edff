//! Configuration models and loaders for the Electric Aircraft Sizer.
//!
//! Three catalogs feed a sizing run: mission profiles (one TOML file per
//! mission in a directory, or a YAML list), the powerplant catalog (motors
//! and battery cells in one YAML document), and the reference fleet the
//! weight trend is fitted against.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One flight phase as written in a mission manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct PhaseConfig {
    pub name: String,
    pub final_speed_m_s: f64,
    pub lift_over_drag: f64,
    pub duration_s: f64,
    pub vertical_speed_m_s: f64,
    pub speed_change_m_s: f64,
    /// Consecutive occurrences of this phase (defaults to one).
    #[serde(default)]
    pub repeat: Option<u32>,
}

/// Mission profile parsed from a mission manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct MissionConfig {
    pub name: String,
    pub takeoff_mass_guess_kg: f64,
    pub payload_kg: f64,
    #[serde(default)]
    pub low_voltage_ratio: Option<f64>,
    #[serde(rename = "phase")]
    pub phases: Vec<PhaseConfig>,
}

/// Motor specification in the powerplant catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct MotorConfig {
    pub name: String,
    pub input_voltage_v: f64,
    pub whole_chain_efficiency: f64,
    pub max_continuous_power_w: f64,
}

/// Battery cell specification in the powerplant catalog, datasheet units.
#[derive(Debug, Deserialize, Clone)]
pub struct CellConfig {
    pub name: String,
    pub nominal_cell_voltage_v: f64,
    pub c_max_per_hour: f64,
    pub cell_capacity_ah: f64,
    pub specific_energy_wh_kg: f64,
}

/// The whole powerplant catalog: every motor and cell available to a run.
#[derive(Debug, Deserialize, Clone)]
pub struct PowerplantCatalog {
    pub motors: Vec<MotorConfig>,
    pub cells: Vec<CellConfig>,
}

/// Airframe category tag on reference fleet entries.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AircraftClassConfig {
    #[serde(rename = "trainer")]
    Trainer,
    #[serde(rename = "endurance_uav")]
    EnduranceUav,
    #[serde(rename = "motor_glider")]
    MotorGlider,
}

/// One aircraft of the reference fleet.
#[derive(Debug, Deserialize, Clone)]
pub struct FleetPlaneConfig {
    pub name: String,
    pub class: AircraftClassConfig,
    pub takeoff_mass_kg: f64,
    pub empty_mass_kg: f64,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load mission manifests from a directory of TOML files or a YAML list.
pub fn load_missions<P: AsRef<Path>>(path: P) -> Result<Vec<MissionConfig>, ConfigError> {
    load_records(path)
}

/// Load the powerplant catalog from a single YAML document.
pub fn load_powerplants<P: AsRef<Path>>(path: P) -> Result<PowerplantCatalog, ConfigError> {
    let reader = File::open(path)?;
    Ok(serde_yaml::from_reader(reader)?)
}

/// Load the reference fleet from a YAML list.
pub fn load_fleet<P: AsRef<Path>>(path: P) -> Result<Vec<FleetPlaneConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
