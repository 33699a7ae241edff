use clap::Parser;
use electric_aircraft_sizer::export;
use electric_aircraft_sizer::matching::{MatchingRequest, sweep};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sweep wing-loading and power-loading matching constraints to CSV"
)]
struct Cli {
    /// Altitude the stall requirement applies at, in meters
    #[arg(long, default_value_t = 100.0)]
    stall_altitude: f64,

    /// Maximum clean lift coefficient
    #[arg(long, default_value_t = 1.2)]
    cl_max: f64,

    /// Power-off stall speed requirement in m/s
    #[arg(long, default_value_t = 8.0)]
    stall_speed: f64,

    /// Climb speed in m/s
    #[arg(long, default_value_t = 22.4)]
    climb_speed: f64,

    /// Lift-over-drag ratio in the climb
    #[arg(long, default_value_t = 10.0)]
    climb_lod: f64,

    /// Climb rate in m/s
    #[arg(long, default_value_t = 2.54)]
    climb_rate: f64,

    /// Cruise speed in m/s
    #[arg(long, default_value_t = 22.4)]
    cruise_speed: f64,

    /// Lift-over-drag ratio in cruise
    #[arg(long, default_value_t = 20.0)]
    cruise_lod: f64,

    /// Lowest wing loading sampled, in N/m²
    #[arg(long, default_value_t = 20.0)]
    min_wing_loading: f64,

    /// Highest wing loading sampled, in N/m²
    #[arg(long, default_value_t = 200.0)]
    max_wing_loading: f64,

    /// Number of sweep steps between the range ends
    #[arg(long, default_value_t = 90)]
    steps: usize,

    /// Output CSV path ('-' for stdout)
    #[arg(long, default_value = "artifacts/matching.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let request = MatchingRequest {
        stall_altitude_m: cli.stall_altitude,
        max_clean_cl: cli.cl_max,
        stall_speed_m_s: cli.stall_speed,
        climb_speed_m_s: cli.climb_speed,
        climb_lift_over_drag: cli.climb_lod,
        climb_rate_m_s: cli.climb_rate,
        cruise_speed_m_s: cli.cruise_speed,
        cruise_lift_over_drag: cli.cruise_lod,
    };

    let points = sweep(
        &request,
        cli.min_wing_loading,
        cli.max_wing_loading,
        cli.steps,
    )?;

    let mut writer = export::writer_for_path(&cli.output)?;
    export::matching::write_header(writer.as_mut())?;
    for point in &points {
        export::matching::Record {
            wing_loading_n_m2: point.wing_loading_n_m2,
            stall_limit_n_m2: point.stall_limit_n_m2,
            climb_power_to_weight_w_n: point.climb_power_to_weight_w_n,
            cruise_power_to_weight_w_n: point.cruise_power_to_weight_w_n,
            feasible: point.feasible,
        }
        .write_to(writer.as_mut())?;
    }
    drop(writer);

    let first = &points[0];
    eprintln!(
        "stall cap {:.1} N/m², climb floor {:.3} W/N, cruise floor {:.3} W/N, {} of {} samples feasible",
        first.stall_limit_n_m2,
        first.climb_power_to_weight_w_n,
        first.cruise_power_to_weight_w_n,
        points.iter().filter(|p| p.feasible).count(),
        points.len()
    );

    Ok(())
}
