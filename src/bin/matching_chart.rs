use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a matching chart from a matching-sweep CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/matching.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
}

#[derive(Debug, Clone)]
struct SweepRow {
    wing_loading: f64,
    stall_limit: f64,
    climb_floor: f64,
    cruise_floor: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let rows = read_rows(&cli.input)?;
    if rows.is_empty() {
        return Err(anyhow::anyhow!("No usable rows in the provided CSV"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let x_min = rows
        .iter()
        .map(|r| r.wing_loading)
        .fold(f64::INFINITY, f64::min);
    let x_max = rows
        .iter()
        .map(|r| r.wing_loading)
        .fold(f64::NEG_INFINITY, f64::max);
    let stall_limit = rows[0].stall_limit;
    let mut y_max = rows
        .iter()
        .map(|r| r.climb_floor.max(r.cruise_floor))
        .fold(0.0, f64::max)
        * 1.4;
    if !y_max.is_finite() || y_max <= 0.0 {
        y_max = 1.0;
    }

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Matching chart".to_string(), caption_font)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Wing loading (N/m²)")
        .y_desc("Power to weight (W/N)")
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(8)
        .draw()?;

    // Feasible region: under the stall cap, above both power floors.
    let floor = rows
        .iter()
        .map(|r| r.climb_floor.max(r.cruise_floor))
        .fold(0.0, f64::max);
    let region_right = stall_limit.min(x_max);
    if region_right > x_min && floor < y_max {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_min, floor), (region_right, y_max)],
            GREEN.mix(0.15).filled(),
        )))?;
    }

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.wing_loading, r.climb_floor)),
            ShapeStyle::from(&BLUE).stroke_width(2),
        ))?
        .label("climb floor")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.wing_loading, r.cruise_floor)),
            ShapeStyle::from(&RED).stroke_width(2),
        ))?
        .label("cruise floor")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(2)));

    if stall_limit >= x_min && stall_limit <= x_max {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(stall_limit, 0.0), (stall_limit, y_max)],
                ShapeStyle::from(&BLACK).stroke_width(2),
            )))?
            .label("stall cap")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLACK.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.8))
        .label_font(label_font)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    println!("Wrote {}", output_str);
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_rows(path: &str) -> anyhow::Result<Vec<SweepRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let col = |name: &str| -> anyhow::Result<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
    };
    let wing_idx = col("wing_loading_n_m2")?;
    let stall_idx = col("stall_limit_n_m2")?;
    let climb_idx = col("climb_power_to_weight_w_n")?;
    let cruise_idx = col("cruise_power_to_weight_w_n")?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let parse = |idx: usize| -> f64 { r.get(idx).unwrap_or("").parse().unwrap_or(f64::NAN) };
        let row = SweepRow {
            wing_loading: parse(wing_idx),
            stall_limit: parse(stall_idx),
            climb_floor: parse(climb_idx),
            cruise_floor: parse(cruise_idx),
        };
        if row.wing_loading.is_finite()
            && row.stall_limit.is_finite()
            && row.climb_floor.is_finite()
            && row.cruise_floor.is_finite()
        {
            rows.push(row);
        }
    }
    Ok(rows)
}
