//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod phases {
    use std::io::{self, Write};

    const HEADER: &str =
        "phase,final_speed_m_s,lift_over_drag,duration_s,vertical_speed_m_s,speed_change_m_s,required_power_w,occurrences";

    /// Write the standard phase-power CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the phase-power exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub phase: &'a str,
        pub final_speed_m_s: f64,
        pub lift_over_drag: f64,
        pub duration_s: f64,
        pub vertical_speed_m_s: f64,
        pub speed_change_m_s: f64,
        pub required_power_w: f64,
        pub occurrences: usize,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{}",
                self.phase,
                self.final_speed_m_s,
                self.lift_over_drag,
                self.duration_s,
                self.vertical_speed_m_s,
                self.speed_change_m_s,
                self.required_power_w,
                self.occurrences,
            )
        }
    }
}

pub mod matching {
    use std::io::{self, Write};

    const HEADER: &str =
        "wing_loading_n_m2,stall_limit_n_m2,climb_power_to_weight_w_n,cruise_power_to_weight_w_n,feasible";

    /// Write the standard matching-sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the matching-sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub wing_loading_n_m2: f64,
        pub stall_limit_n_m2: f64,
        pub climb_power_to_weight_w_n: f64,
        pub cruise_power_to_weight_w_n: f64,
        pub feasible: bool,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.6},{:.6},{:.6},{:.6},{}",
                self.wing_loading_n_m2,
                self.stall_limit_n_m2,
                self.climb_power_to_weight_w_n,
                self.cruise_power_to_weight_w_n,
                if self.feasible { "true" } else { "false" },
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Metadata describing the sizing run.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub mission: &'a str,
        pub motor: &'a str,
        pub cell: &'a str,
    }

    /// Battery pack layout in the summary sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct PackSummary {
        pub number_in_series: u32,
        pub number_in_parallel: u32,
        pub number_of_cells: u32,
        pub pack_mass_kg: f64,
    }

    /// Fitted weight-trend line in the summary sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct TrendSummary {
        pub slope: f64,
        pub y_intercept: f64,
    }

    /// Converged mass budget in the summary sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct ConvergenceSummary {
        pub iterated_empty_mass_kg: f64,
        pub iterated_takeoff_mass_kg: f64,
        pub iterations: u32,
    }

    /// Envelope of one sizing run.
    #[derive(Debug, Serialize)]
    pub struct SizingSummary {
        pub takeoff_mass_guess_kg: f64,
        pub payload_kg: f64,
        pub peak_power_w: f64,
        pub mission_energy_j: f64,
        pub pack: PackSummary,
        pub trend: Option<TrendSummary>,
        pub converged: Option<ConvergenceSummary>,
    }

    #[derive(Serialize)]
    struct SummarySidecar<'a> {
        mission: &'a str,
        motor: &'a str,
        cell: &'a str,
        takeoff_mass_guess_kg: f64,
        payload_kg: f64,
        peak_power_w: f64,
        mission_energy_j: f64,
        pack: &'a PackSummary,
        trend: &'a Option<TrendSummary>,
        converged: &'a Option<ConvergenceSummary>,
    }

    /// Write the JSON summary sidecar for a sizing run.
    pub fn write_summary(
        output: &Path,
        meta: &Metadata<'_>,
        summary: &SizingSummary,
    ) -> io::Result<()> {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }

        let sidecar = SummarySidecar {
            mission: meta.mission,
            motor: meta.motor,
            cell: meta.cell,
            takeoff_mass_guess_kg: summary.takeoff_mass_guess_kg,
            payload_kg: summary.payload_kg,
            peak_power_w: summary.peak_power_w,
            mission_energy_j: summary.mission_energy_j,
            pack: &summary.pack,
            trend: &summary.trend,
            converged: &summary.converged,
        };

        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}
