use clap::{Parser, ValueEnum};
use electric_aircraft_sizer::config::{MissionConfig, load_fleet, load_missions, load_powerplants};
use electric_aircraft_sizer::export;
use electric_aircraft_sizer::export::summary::{
    ConvergenceSummary, Metadata, PackSummary, SizingSummary, TrendSummary,
};
use electric_aircraft_sizer::sizing::catalog;
use electric_aircraft_sizer::sizing::{
    AircraftClass, IterationSettings, compute_phase_powers, converge, size_battery_pack,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Size a small electric aircraft from a mission profile"
)]
struct Cli {
    /// Mission name from the missions catalog (case-insensitive)
    #[arg(long)]
    mission: String,

    /// Motor name from the powerplant catalog (defaults to first entry)
    #[arg(long)]
    motor: Option<String>,

    /// Battery cell name from the powerplant catalog (defaults to first entry)
    #[arg(long)]
    cell: Option<String>,

    /// Restrict the reference fleet to one airframe class
    #[arg(long, value_enum)]
    class: Option<ClassArg>,

    /// Relative empty-mass error at which the iteration stops
    #[arg(long, default_value_t = 0.005)]
    tolerance: f64,

    /// Corrections allowed before the iteration gives up
    #[arg(long, default_value_t = 100)]
    max_iterations: u32,

    /// Size the pack at the initial guess only, skipping the mass iteration
    #[arg(long, default_value_t = false)]
    no_iterate: bool,

    /// Write the per-phase power table as CSV ('-' for stdout)
    #[arg(long)]
    export_phases: Option<PathBuf>,

    /// Write a JSON summary of the run
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Mission catalog location
    #[arg(long, default_value = "configs/missions")]
    missions: PathBuf,

    /// Powerplant catalog location
    #[arg(long, default_value = "configs/powerplants.yaml")]
    powerplants: PathBuf,

    /// Reference fleet location
    #[arg(long, default_value = "configs/fleet.yaml")]
    fleet: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ClassArg {
    Trainer,
    EnduranceUav,
    MotorGlider,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let missions = load_missions(&cli.missions)?;
    let powerplants = load_powerplants(&cli.powerplants)?;
    let fleet = load_fleet(&cli.fleet)?;

    let mission_cfg = find_mission(&missions, &cli.mission)?;
    let motor = catalog::motor_from_config(catalog::select_motor(
        &powerplants.motors,
        cli.motor.as_deref(),
    )?);
    let cell = catalog::cell_from_config(catalog::select_cell(
        &powerplants.cells,
        cli.cell.as_deref(),
    )?)?;
    let mut mission = catalog::mission_from_config(&mission_cfg);

    let mut trend_summary = None;
    let mut convergence_summary = None;
    if !cli.no_iterate {
        let class = cli.class.map(|c| match c {
            ClassArg::Trainer => AircraftClass::Trainer,
            ClassArg::EnduranceUav => AircraftClass::EnduranceUav,
            ClassArg::MotorGlider => AircraftClass::MotorGlider,
        });
        let trend = catalog::trend_from_config(&fleet, class)?;
        let line = trend.fit()?;
        let settings = IterationSettings {
            acceptable_error: cli.tolerance,
            max_iterations: cli.max_iterations,
        };
        let result = converge(&motor, &mut mission, &cell, &trend, settings)?;
        trend_summary = Some(TrendSummary {
            slope: line.slope,
            y_intercept: line.y_intercept,
        });
        convergence_summary = Some(ConvergenceSummary {
            iterated_empty_mass_kg: result.iterated_empty_mass_kg,
            iterated_takeoff_mass_kg: result.iterated_takeoff_mass_kg,
            iterations: result.iterations,
        });
    }

    // After iteration the guess holds the converged takeoff mass, so this
    // table is the one the aircraft actually flies with.
    let sized_mass_kg = mission.takeoff_mass_guess_kg;
    let powers = compute_phase_powers(&mission, sized_mass_kg)?;
    let pack = size_battery_pack(&motor, &mission, &cell, &powers)?;

    println!("=== Sizing Report: {} ===", mission_cfg.name);
    println!("Motor          : {}", motor.name);
    println!("Battery cell   : {}", cell.name);
    println!("Takeoff mass   : {:.3} kg", sized_mass_kg);
    println!("Payload        : {:.3} kg", mission.payload_kg);
    println!("Phase power (W):");
    for entry in powers.entries() {
        let occurrences = mission
            .all_phases()
            .iter()
            .filter(|phase| *phase == &entry.phase)
            .count();
        println!(
            "  {:<12} {:>10.3}  x{}",
            entry.phase.name, entry.required_power_w, occurrences
        );
    }
    println!("Peak power     : {:.3} W", powers.peak_power_w());
    println!("Mission energy : {:.1} J", powers.mission_energy_j());
    println!(
        "Pack layout    : {}s{}p ({} cells), {:.3} kg",
        pack.number_in_series, pack.number_in_parallel, pack.number_of_cells, pack.pack_mass_kg
    );
    println!(
        "Pack governed  : {}",
        if pack.number_in_parallel_endurance >= pack.number_in_parallel_power {
            "endurance"
        } else {
            "peak power"
        }
    );
    if let Some(result) = &convergence_summary {
        println!(
            "Converged      : takeoff = {:.3} kg, empty = {:.3} kg ({} corrections)",
            result.iterated_takeoff_mass_kg, result.iterated_empty_mass_kg, result.iterations
        );
    }
    if powers.peak_power_w() > motor.max_continuous_power_w {
        eprintln!(
            "warning: peak demand {:.1} W exceeds the motor's continuous rating {:.1} W",
            powers.peak_power_w(),
            motor.max_continuous_power_w
        );
    }

    if let Some(path) = &cli.export_phases {
        let mut writer = export::writer_for_path(path)?;
        export::phases::write_header(writer.as_mut())?;
        for entry in powers.entries() {
            let occurrences = mission
                .all_phases()
                .iter()
                .filter(|phase| *phase == &entry.phase)
                .count();
            export::phases::Record {
                phase: &entry.phase.name,
                final_speed_m_s: entry.phase.final_speed_m_s,
                lift_over_drag: entry.phase.lift_over_drag,
                duration_s: entry.phase.duration_s,
                vertical_speed_m_s: entry.phase.vertical_speed_m_s,
                speed_change_m_s: entry.phase.speed_change_m_s,
                required_power_w: entry.required_power_w,
                occurrences,
            }
            .write_to(writer.as_mut())?;
        }
    }

    if let Some(path) = &cli.summary {
        let meta = Metadata {
            mission: &mission_cfg.name,
            motor: &motor.name,
            cell: &cell.name,
        };
        let summary = SizingSummary {
            takeoff_mass_guess_kg: mission_cfg.takeoff_mass_guess_kg,
            payload_kg: mission.payload_kg,
            peak_power_w: powers.peak_power_w(),
            mission_energy_j: powers.mission_energy_j(),
            pack: PackSummary {
                number_in_series: pack.number_in_series,
                number_in_parallel: pack.number_in_parallel,
                number_of_cells: pack.number_of_cells,
                pack_mass_kg: pack.pack_mass_kg,
            },
            trend: trend_summary,
            converged: convergence_summary,
        };
        export::summary::write_summary(path, &meta, &summary)?;
    }

    Ok(())
}

fn find_mission(missions: &[MissionConfig], name: &str) -> anyhow::Result<MissionConfig> {
    let upper = name.to_uppercase();
    missions
        .iter()
        .find(|m| m.name.to_uppercase() == upper)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Mission '{}' not found in catalog", name))
}
