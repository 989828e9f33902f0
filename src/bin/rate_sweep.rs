//! Sweep annual rates and cadences over a base projection
//!
//! Writes one row per (rate, cadence) with the final totals and the
//! milestone year, for charting sensitivity outside the CLI.
//!
//! Usage: rate_sweep [output.csv] [config.json]

use growth_analytics::projection::Cadence;
use growth_analytics::{DashboardConfig, ScenarioRunner};
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// 1% through 12% in whole percents
const SWEEP_RATES: [f64; 12] = [
    0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.07, 0.08, 0.09, 0.10, 0.11, 0.12,
];

#[derive(Debug, Clone)]
struct SweepRow {
    rate: f64,
    cadence: Cadence,
    final_total: f64,
    final_contributed: f64,
    milestone_year: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let output_path = args.get(1).map(String::as_str).unwrap_or("rate_sweep.csv");
    let config = match args.get(2) {
        Some(path) => DashboardConfig::from_json_path(path)?,
        None => DashboardConfig::default(),
    };

    let base = config.growth_parameters()?;
    println!(
        "Base: ${:.0} start, ${:.0} per period, {} years",
        base.principal, base.contribution, base.horizon_years
    );

    let start = Instant::now();
    let mut rows = Vec::with_capacity(SWEEP_RATES.len() * Cadence::ALL.len());

    for cadence in Cadence::ALL {
        let runner = ScenarioRunner::new(base.with_cadence(cadence))?;
        let results = runner.run_rates(&SWEEP_RATES)?;

        for series in results {
            let summary = series.summary(config.milestone);
            rows.push(SweepRow {
                rate: series.params.annual_rate,
                cadence,
                final_total: summary.final_total,
                final_contributed: summary.final_contributed,
                milestone_year: summary.milestone_year,
            });
        }
    }

    println!("Ran {} projections in {:?}", rows.len(), start.elapsed());

    let mut file = File::create(output_path)?;
    writeln!(file, "Rate,Cadence,Final Total,Total Contributed,Gain,Milestone Year")?;
    for row in &rows {
        writeln!(
            file,
            "{:.2},{},{:.2},{:.2},{:.2},{}",
            row.rate * 100.0,
            row.cadence,
            row.final_total,
            row.final_contributed,
            row.final_total - row.final_contributed,
            row.milestone_year.map(|y| y.to_string()).unwrap_or_default(),
        )?;
    }

    println!("Wrote {}", output_path);

    // Quick look at the default cadence
    println!("\n{:>6} {:>16} {:>10}", "Rate", "Final Total", "Milestone");
    for row in rows.iter().filter(|r| r.cadence == Cadence::default()) {
        println!(
            "{:>5.0}% {:>16.2} {:>10}",
            row.rate * 100.0,
            row.final_total,
            row.milestone_year.map(|y| y.to_string()).unwrap_or_else(|| "-".into()),
        );
    }

    Ok(())
}
