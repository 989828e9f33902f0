//! Dashboard defaults, loadable from a JSON file
//!
//! Every field is optional in the file; missing fields take the calculator's
//! defaults. Command-line flags override whatever the file sets.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metrics::{Horizon, MATURITY_GRACE_DAYS, MAX_COHORT_SIZE};
use crate::numeric::{ColorGradient, Rgb};
use crate::projection::{Cadence, GrowthParameters, DEFAULT_HORIZON_YEARS, DEFAULT_MILESTONE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Starting amount invested (default: $10,000)
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Recurring contribution (default: $500)
    #[serde(default = "default_contribution")]
    pub contribution: f64,

    /// Contribution frequency (default: monthly)
    #[serde(default)]
    pub cadence: Cadence,

    /// Expected annual return as a fraction (default: 7%)
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    /// Years to project (default: 50)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Total value marked on the projection (default: $1,000,000)
    #[serde(default = "default_milestone")]
    pub milestone: f64,

    /// Largest cohort compared at once (default: 10)
    #[serde(default = "default_max_tickers")]
    pub max_tickers: usize,

    /// Analytics horizon when none is given (default: 3y)
    #[serde(default)]
    pub horizon: Horizon,

    /// Slack before a short history is flagged (default: 30 days)
    #[serde(default = "default_grace_days")]
    pub maturity_grace_days: i64,

    /// Gradient anchors as `#rrggbb` (default: red, amber, green)
    #[serde(default = "default_gradient_colors")]
    pub gradient_colors: [String; 3],
}

fn default_principal() -> f64 { 10_000.0 }
fn default_contribution() -> f64 { 500.0 }
fn default_annual_rate() -> f64 { 0.07 }
fn default_horizon_years() -> u32 { DEFAULT_HORIZON_YEARS }
fn default_milestone() -> f64 { DEFAULT_MILESTONE }
fn default_max_tickers() -> usize { MAX_COHORT_SIZE }
fn default_grace_days() -> i64 { MATURITY_GRACE_DAYS }
fn default_gradient_colors() -> [String; 3] {
    [ColorGradient::POOR, ColorGradient::NEUTRAL, ColorGradient::GOOD].map(|c| c.to_hex())
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            contribution: default_contribution(),
            cadence: Cadence::default(),
            annual_rate: default_annual_rate(),
            horizon_years: default_horizon_years(),
            milestone: default_milestone(),
            max_tickers: default_max_tickers(),
            horizon: Horizon::default(),
            maturity_grace_days: default_grace_days(),
            gradient_colors: default_gradient_colors(),
        }
    }
}

impl DashboardConfig {
    /// Load from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validated projection parameters
    pub fn growth_parameters(&self) -> Result<GrowthParameters> {
        GrowthParameters::new(
            self.principal,
            self.contribution,
            self.cadence,
            self.annual_rate,
            self.horizon_years,
        )
    }

    /// Poor, neutral and good anchors parsed from `gradient_colors`
    pub fn gradient(&self) -> Result<ColorGradient> {
        let [poor, neutral, good] = &self.gradient_colors;
        Ok(ColorGradient::new(
            Rgb::from_hex(poor)?,
            Rgb::from_hex(neutral)?,
            Rgb::from_hex(good)?,
        ))
    }
}
