//! Inputs for a growth projection run

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Horizon of the default calculator view, in years
pub const DEFAULT_HORIZON_YEARS: u32 = 50;

/// How often a contribution is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Weekly,
    Fortnightly,
    Monthly,
}

impl Cadence {
    pub const ALL: [Cadence; 3] = [Cadence::Weekly, Cadence::Fortnightly, Cadence::Monthly];

    /// Compounding periods (and contributions) per year
    pub fn periods_per_year(self) -> u32 {
        match self {
            Cadence::Weekly => 52,
            Cadence::Fortnightly => 26,
            Cadence::Monthly => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::Weekly => "weekly",
            Cadence::Fortnightly => "fortnightly",
            Cadence::Monthly => "monthly",
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Cadence::Monthly
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Cadence::Weekly),
            "fortnightly" | "biweekly" => Ok(Cadence::Fortnightly),
            "monthly" => Ok(Cadence::Monthly),
            _ => Err(AnalyticsError::UnknownCadence(s.to_string())),
        }
    }
}

/// Parameters of one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthParameters {
    /// Initial amount invested
    pub principal: f64,

    /// Amount added every period
    pub contribution: f64,

    /// Contribution and compounding frequency
    pub cadence: Cadence,

    /// Expected annual return as a fraction (0.07 = 7%)
    pub annual_rate: f64,

    /// Number of years to project
    pub horizon_years: u32,
}

impl GrowthParameters {
    /// Build and validate a parameter set
    pub fn new(
        principal: f64,
        contribution: f64,
        cadence: Cadence,
        annual_rate: f64,
        horizon_years: u32,
    ) -> Result<Self> {
        let params = Self {
            principal,
            contribution,
            cadence,
            annual_rate,
            horizon_years,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reject negative or non-finite amounts and rates. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        check_amount("principal", self.principal)?;
        check_amount("contribution", self.contribution)?;
        check_amount("annual_rate", self.annual_rate)?;
        Ok(())
    }

    /// Growth factor applied once per period
    pub fn period_growth_factor(&self) -> f64 {
        1.0 + self.annual_rate / self.cadence.periods_per_year() as f64
    }

    /// Copy with a different annual rate
    pub fn with_rate(&self, annual_rate: f64) -> Self {
        Self {
            annual_rate,
            ..self.clone()
        }
    }

    /// Copy with a different cadence
    pub fn with_cadence(&self, cadence: Cadence) -> Self {
        Self {
            cadence,
            ..self.clone()
        }
    }
}

impl Default for GrowthParameters {
    /// Calculator defaults: $10,000 start, $500 monthly, 7% for 50 years
    fn default() -> Self {
        Self {
            principal: 10_000.0,
            contribution: 500.0,
            cadence: Cadence::Monthly,
            annual_rate: 0.07,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

fn check_amount(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AnalyticsError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(AnalyticsError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}
