//! fitreport - Workout CSV cleaning, aggregation & chart report generator
//!
//! Loads the workout CSV, cleans anomalies, prints table previews and the
//! calories-by-duration aggregate, then renders and opens two charts.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process;

use fitreport::charts::ChartRenderer;
use fitreport::data::{clean, LoaderError, WorkoutLoader};
use fitreport::stats;

const PREVIEW_ROWS: usize = 5;
const SEPARATOR_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "fitreport")]
#[command(about = "Clean a workout CSV and chart calories by date and duration")]
struct Cli {
    /// CSV file with Duration, Date, Pulse, Maxpulse and Calories columns
    /// (no header row)
    #[arg(value_name = "FILE", default_value = "health_data.csv")]
    input: PathBuf,

    /// Directory the chart images are written to
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,

    /// Render the charts without opening them in the system image viewer
    #[arg(long)]
    no_show: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = match WorkoutLoader::new(&cli.input).load() {
        Ok(table) => table,
        Err(LoaderError::FileNotFound { path }) => {
            println!("Error: The file '{}' was not found.", path.display());
            println!("Please make sure the CSV file is in the same directory as the program.");
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };
    info!("loaded {} rows from '{}'", raw.len(), cli.input.display());

    println!("--- Initial Data (First {PREVIEW_ROWS} Rows) ---");
    println!("{}", raw.to_dataframe()?.head(Some(PREVIEW_ROWS)));
    print_separator();

    let cleaned = clean(raw)?;
    info!("{} rows after cleaning", cleaned.len());

    println!("--- Cleaned Data (First {PREVIEW_ROWS} Rows) ---");
    println!("{}", cleaned.to_dataframe()?.head(Some(PREVIEW_ROWS)));
    print_separator();

    let sorted = stats::sort_by_date(cleaned);
    let summary = stats::mean_calories_by_duration(&sorted);

    println!("--- Average Calories Burned by Workout Duration ---");
    for (duration, mean) in &summary {
        println!("{duration:>4} min  {mean:>8.2} kcal");
    }
    print_separator();

    let renderer = ChartRenderer::new(&cli.out_dir);
    info!("rendering line chart: calories burned over time");
    let line_chart = renderer.render_calories_over_time(&sorted)?;
    info!("rendering bar chart: average calories by workout duration");
    let bar_chart = renderer.render_mean_calories_by_duration(&summary)?;

    if !cli.no_show {
        open::that(&line_chart)?;
        open::that(&bar_chart)?;
    } else {
        info!(
            "charts written to '{}' and '{}'",
            line_chart.display(),
            bar_chart.display()
        );
    }

    Ok(())
}

fn print_separator() {
    println!("\n{}\n", "=".repeat(SEPARATOR_WIDTH));
}
