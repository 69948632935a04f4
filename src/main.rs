//! Day planner CLI.
//!
//! Reads a JSON day request and prints the allocated schedule.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use u_dayplan::config::PlannerConfig;
use u_dayplan::encoding::{conic_gradient, encode, GridSegment};
use u_dayplan::models::{Category, DaySchedule, ScheduleEntry, Warning};
use u_dayplan::scheduler::{DayRequest, DaySummary, ScheduleBuilder};

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Allocate sleep, appointments, meals and to-dos onto a single day")]
struct Cli {
    /// Day request (JSON: sleep, fixed, todos)
    request: PathBuf,

    /// Planner configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the conic-gradient string for the clock ring
    #[arg(long)]
    gradient: bool,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    entries: &'a [ScheduleEntry],
    warnings: &'a [Warning],
    segments: Vec<GridSegment>,
    summary: DaySummary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };

    let text = std::fs::read_to_string(&cli.request)
        .with_context(|| format!("reading request {}", cli.request.display()))?;
    let request: DayRequest = serde_json::from_str(&text)
        .with_context(|| format!("parsing request {}", cli.request.display()))?;

    let schedule = ScheduleBuilder::new()
        .with_config(config)
        .build(&request)
        .context("cannot build schedule")?;

    match cli.format {
        Format::Text => print_text(&schedule, cli.gradient),
        Format::Json => {
            let report = JsonReport {
                entries: schedule.entries(),
                warnings: schedule.warnings(),
                segments: encode(schedule.grid()),
                summary: DaySummary::calculate(&schedule),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn print_text(schedule: &DaySchedule, gradient: bool) {
    for entry in schedule.entries() {
        println!(
            "{} ~ {}  {:<24} [{}]",
            entry.start, entry.end, entry.title, entry.category
        );
    }

    for warning in schedule.warnings() {
        println!("warning: {}", warning.message);
    }

    let summary = DaySummary::calculate(schedule);
    println!();
    for category in Category::ALL {
        println!("{:>6}: {:>4} min", category.tag(), summary.minutes(category));
    }
    println!("occupancy: {:.1}%", summary.occupancy * 100.0);
    if let Some(first) = summary.first_start {
        println!("first start: {first}");
    }

    if gradient {
        println!("{}", conic_gradient(&encode(schedule.grid())));
    }
}
