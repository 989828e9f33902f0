//! Growth Analytics CLI
//!
//! Commands:
//! - `project`: compound growth table, milestone and optional CSV export
//! - `compare`: return/risk stats for a ticker cohort loaded from CSV
//! - `themes`: list the built-in ticker cohorts

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use growth_analytics::metrics::{
    derive_report_with, load_tickers, metrics_table, prepare_cohort, CohortReport, Horizon,
    MetricsRow,
};
use growth_analytics::numeric::format_compact_currency;
use growth_analytics::projection::{project_series, Cadence, GrowthSeries, GrowthSummary};
use growth_analytics::themes::{find_theme, PORTFOLIO_THEMES};
use growth_analytics::DashboardConfig;

#[derive(Parser)]
#[command(
    name = "growth-analytics",
    version,
    about = "Compound growth forecasts and ticker risk/return comparisons"
)]
struct Cli {
    /// JSON file with dashboard defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project compound growth year by year.
    Project {
        /// Starting amount invested.
        #[arg(long)]
        principal: Option<f64>,

        /// Amount added every period.
        #[arg(long)]
        contribution: Option<f64>,

        /// weekly, fortnightly or monthly.
        #[arg(long)]
        cadence: Option<Cadence>,

        /// Expected annual return as a fraction (0.07 = 7%).
        #[arg(long)]
        rate: Option<f64>,

        /// Years to project.
        #[arg(long)]
        years: Option<u32>,

        /// Total value to mark as a milestone.
        #[arg(long)]
        milestone: Option<f64>,

        /// Write `Year,Total,Total Contributed` rows to this file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compare CAGR and risk across a ticker cohort.
    Compare {
        /// CSV export of the stock_metrics table.
        #[arg(long)]
        input: PathBuf,

        /// 3y, 5y or 10y.
        #[arg(long)]
        horizon: Option<Horizon>,

        /// Keep only the tickers of a built-in theme.
        #[arg(long)]
        theme: Option<String>,

        /// Reference date for coverage flags (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Write `Ticker,Name,Risk (%),CAGR (%),Return/Risk` rows to this file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the built-in ticker themes.
    Themes,
}

#[derive(Serialize)]
struct ProjectionOutput<'a> {
    summary: GrowthSummary,
    series: &'a GrowthSeries,
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    report: &'a CohortReport,
    rows: &'a [MetricsRow],
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DashboardConfig::from_json_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    match cli.command {
        Commands::Project {
            principal,
            contribution,
            cadence,
            rate,
            years,
            milestone,
            csv,
            json,
        } => {
            let mut config = config;
            config.principal = principal.unwrap_or(config.principal);
            config.contribution = contribution.unwrap_or(config.contribution);
            config.cadence = cadence.unwrap_or(config.cadence);
            config.annual_rate = rate.unwrap_or(config.annual_rate);
            config.horizon_years = years.unwrap_or(config.horizon_years);
            config.milestone = milestone.unwrap_or(config.milestone);
            cmd_project(&config, csv, json)
        }
        Commands::Compare {
            input,
            horizon,
            theme,
            today,
            csv,
            json,
        } => {
            let horizon = horizon.unwrap_or(config.horizon);
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            cmd_compare(&config, &input, horizon, theme.as_deref(), today, csv, json)
        }
        Commands::Themes => {
            for theme in PORTFOLIO_THEMES {
                println!("{}", theme.name);
                println!("  {}", theme.description);
                println!("  {}", theme.tickers.join(", "));
            }
            Ok(())
        }
    }
}

fn cmd_project(config: &DashboardConfig, csv: Option<PathBuf>, json: bool) -> Result<()> {
    let params = config.growth_parameters().context("invalid projection parameters")?;
    let series = project_series(&params)?;
    let summary = series.summary(config.milestone);

    if let Some(path) = csv {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        series.write_csv(file)?;
        info!("projection written to {}", path.display());
    }

    if json {
        let output = ProjectionOutput {
            summary,
            series: &series,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "Projection: ${:.2} start, ${:.2} {}, {:.2}% for {} years",
        params.principal,
        params.contribution,
        params.cadence,
        params.annual_rate * 100.0,
        params.horizon_years
    );
    println!();
    println!("{:>5} {:>16} {:>16} {:>16}", "Year", "Contributed", "Gain", "Total");
    println!("{}", "-".repeat(56));

    for point in series.points() {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>16.2}",
            point.year,
            point.total_contributed,
            point.gain(),
            point.total
        );
    }

    println!("\nSummary:");
    println!("  Final Total:       {}", format_compact_currency(summary.final_total));
    println!("  Final Contributed: {}", format_compact_currency(summary.final_contributed));
    println!("  Final Gain:        {}", format_compact_currency(summary.final_gain));
    match summary.milestone_year {
        Some(year) => println!(
            "  {} reached in year {}",
            format_compact_currency(summary.milestone),
            year
        ),
        None => println!(
            "  {} not reached within {} years",
            format_compact_currency(summary.milestone),
            summary.years
        ),
    }

    Ok(())
}

fn cmd_compare(
    config: &DashboardConfig,
    input: &Path,
    horizon: Horizon,
    theme: Option<&str>,
    today: NaiveDate,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut tickers = load_tickers(input)
        .with_context(|| format!("failed to load tickers from {}", input.display()))?;

    if let Some(name) = theme {
        let Some(theme) = find_theme(name) else {
            bail!("unknown theme '{}'", name);
        };
        tickers.retain(|t| theme.contains(&t.ticker));
    }

    let cohort = prepare_cohort(tickers, config.max_tickers);
    let gradient = config.gradient().context("invalid gradient_colors in config")?;
    let report = derive_report_with(&cohort, horizon, &gradient)?;
    let rows = metrics_table(&cohort, horizon, today, config.maturity_grace_days)?;

    if let Some(path) = csv {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        report.write_csv(file)?;
        info!("cohort stats written to {}", path.display());
    }

    if json {
        let output = CompareOutput {
            report: &report,
            rows: &rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Risk vs. CAGR ({})", horizon.label().to_uppercase());
    println!();
    println!(
        "{:<8} {:>10} {:>10} {:>12} {:>8}  {:<8} {:>12}",
        "Ticker", "Risk (%)", "CAGR (%)", "Return/Risk", "Rank", "Color", "Earliest"
    );
    println!("{}", "-".repeat(78));

    for row in &rows {
        let stat = report.stat(&row.ticker);
        println!(
            "{:<8} {:>10} {:>10} {:>12} {:>8}  {:<8} {:>12}{}",
            row.ticker,
            fmt_metric(row.risk),
            fmt_metric(row.cagr),
            fmt_metric(row.ratio),
            stat.map(|s| format!("{:.2}", s.position)).unwrap_or_else(|| "-".into()),
            stat.map(|s| s.color.as_str()).unwrap_or("-"),
            row.earliest_data.format("%Y-%m"),
            if row.immature { " (short history)" } else { "" },
        );
    }

    let summary = &report.summary;
    println!("{}", "-".repeat(78));
    println!(
        "{:<8} {:>10} {:>10} {:>12}",
        "Mean",
        fmt_metric(summary.mean_risk),
        fmt_metric(summary.mean_return),
        fmt_metric(summary.mean_ratio)
    );

    if let Some((min, max)) = report.ratio_range() {
        println!("\nReturn/Risk gradient: {:.2} (red) .. {:.2} (green)", min, max);
    }
    if !report.unavailable.is_empty() {
        println!("No {} figures: {}", horizon, report.unavailable.join(", "));
    }

    Ok(())
}

fn fmt_metric(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "N/A".to_string())
}
