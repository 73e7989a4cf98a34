//! status-report - weekly deployment status report generator.
//!
//! Renders the Rockin' Rockin' Boogie status report for the current date and
//! writes it to `STATUS_REPORTS/`.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use status_report::core::DEFAULT_REPORT_DIR;
use status_report::{Config, ProgressSummary, ReportRenderer, Schedule};

/// Generate the weekly deployment status report
#[derive(Parser)]
#[command(name = "status-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to write the report to
    #[arg(short, long, default_value = DEFAULT_REPORT_DIR)]
    output_dir: PathBuf,

    /// Render as of this date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS) instead of now
    #[arg(long, value_name = "DATE", value_parser = parse_instant)]
    as_of: Option<NaiveDateTime>,

    /// Print the report to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Summary output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON shape printed by `--format json`.
#[derive(Serialize)]
struct GenerateOutput<'a> {
    path: &'a Path,
    #[serde(flatten)]
    summary: ProgressSummary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    let config = Config::default().with_output_dir(cli.output_dir);
    let schedule = Schedule::deployment().context("Deployment schedule is invalid")?;
    let now = cli.as_of.unwrap_or_else(|| Local::now().naive_local());

    if cli.dry_run {
        print!("{}", ReportRenderer::new(&schedule, &config).render(now));
        return Ok(());
    }

    match cli.format {
        OutputFormat::Text => cmd_generate_text(&schedule, &config, now),
        OutputFormat::Json => cmd_generate_json(&schedule, &config, now),
    }
}

/// Generate the report and print the human readable summary.
fn cmd_generate_text(schedule: &Schedule, config: &Config, now: NaiveDateTime) -> Result<()> {
    let rule = "=".repeat(60);

    println!("{rule}");
    println!("{} - Status Report Generator", config.title);
    println!("{rule}");
    println!();

    println!("📊 Generating weekly status report...");
    println!("💾 Saving report to file...");
    let path = status_report::generate(schedule, config, now)
        .context("Failed to generate status report")?;

    println!("✅ Report saved to: {}", path.display());
    println!();
    println!("{rule}");
    println!("Report Generation Complete");
    println!("{rule}");
    println!();
    println!("{}", ProgressSummary::new(schedule, now).to_text());

    Ok(())
}

/// Generate the report and print the summary as JSON.
fn cmd_generate_json(schedule: &Schedule, config: &Config, now: NaiveDateTime) -> Result<()> {
    let path = status_report::generate(schedule, config, now)
        .context("Failed to generate status report")?;

    let output = GenerateOutput { path: &path, summary: ProgressSummary::new(schedule, now) };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Parse `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM:SS`.
///
/// The report dates its successor a week ahead, so instants whose next week
/// chrono cannot represent are rejected.
fn parse_instant(value: &str) -> Result<NaiveDateTime, String> {
    let instant = match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        Ok(instant) => instant,
        Err(_) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|e| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS ({e})"))?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| format!("invalid date: {value}"))?,
    };

    instant
        .checked_add_signed(Duration::days(7))
        .map(|_| instant)
        .ok_or_else(|| format!("date out of range: {value}"))
}
