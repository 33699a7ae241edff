use clap::Parser;
use electric_aircraft_sizer::pattern::{PatternRequest, Waypoint, build_pattern};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Shape the traffic pattern an aircraft can fly at a field"
)]
struct Cli {
    /// Total runway length in meters
    #[arg(long, default_value_t = 163.0)]
    field_length: f64,

    /// Approach glide slope in degrees
    #[arg(long, default_value_t = 3.0)]
    glide_slope: f64,

    /// Pattern altitude above the field in meters
    #[arg(long, default_value_t = 30.0)]
    pattern_altitude: f64,

    /// Aircraft climb rate in m/s
    #[arg(long, default_value_t = 2.54)]
    climb_rate: f64,

    /// Minimum turning radius in meters
    #[arg(long, default_value_t = 75.0)]
    turn_radius: f64,

    /// Approach and pattern speed in m/s
    #[arg(long, default_value_t = 13.4)]
    approach_speed: f64,

    /// Headwind along the runway in m/s
    #[arg(long, default_value_t = 0.0)]
    headwind: f64,

    /// Also print the pattern waypoints
    #[arg(long, default_value_t = false)]
    waypoints: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let request = PatternRequest {
        field_length_m: cli.field_length,
        glide_slope_deg: cli.glide_slope,
        pattern_altitude_m: cli.pattern_altitude,
        climb_rate_m_s: cli.climb_rate,
        turn_radius_m: cli.turn_radius,
        approach_speed_m_s: cli.approach_speed,
        headwind_m_s: cli.headwind,
    };
    let shape = build_pattern(&request)?;

    println!("=== Pattern Shape ===");
    println!("Final leg is {:.0} meters", shape.final_length_m);
    println!(
        "Straight climb distance is {:.0} meters",
        shape.initial_climb_length_m
    );
    println!("Pattern width is {:.0} meters", shape.pattern_diameter_m);
    println!("Downwind distance is {:.0} meters", shape.downwind_length_m);
    println!("Descent distance is {:.0} meters", shape.descent_length_m);
    println!(
        "Available distance needed before runway is {:.0} meters",
        shape.before_runway_length_m
    );
    println!(
        "Available distance needed after runway is {:.0} meters",
        shape.after_runway_length_m
    );

    if cli.waypoints {
        println!("=== Waypoints (threshold frame, m) ===");
        let w = &shape.waypoints;
        print_waypoint("threshold crossing", &w.threshold_crossing);
        print_waypoint("touchdown", &w.touchdown);
        print_waypoint("liftoff", &w.liftoff);
        print_waypoint("climbout end", &w.climbout_end);
        print_waypoint("downwind entry", &w.downwind_entry);
        print_waypoint("abeam threshold", &w.abeam_threshold);
        print_waypoint("descent start", &w.descent_start);
        print_waypoint("base turn start", &w.base_turn_start);
        print_waypoint("final start", &w.final_start);
    }

    Ok(())
}

fn print_waypoint(name: &str, point: &Waypoint) {
    println!(
        "  {:<18} [{:>9.2}, {:>9.2}, {:>7.2}]",
        name, point[0], point[1], point[2]
    );
}
