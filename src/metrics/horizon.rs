//! The closed set of analytics horizons

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Look-back window for CAGR and risk figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "3y")]
    ThreeYear,
    #[serde(rename = "5y")]
    FiveYear,
    #[serde(rename = "10y")]
    TenYear,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::ThreeYear, Horizon::FiveYear, Horizon::TenYear];

    pub fn years(self) -> u32 {
        match self {
            Horizon::ThreeYear => 3,
            Horizon::FiveYear => 5,
            Horizon::TenYear => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::ThreeYear => "3y",
            Horizon::FiveYear => "5y",
            Horizon::TenYear => "10y",
        }
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon::ThreeYear
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Horizon {
    type Err = AnalyticsError;

    /// Accepts `3y`, `3Y`, `3` and the 5/10 year equivalents
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let digits = normalized.strip_suffix('y').unwrap_or(&normalized);
        match digits {
            "3" => Ok(Horizon::ThreeYear),
            "5" => Ok(Horizon::FiveYear),
            "10" => Ok(Horizon::TenYear),
            _ => Err(AnalyticsError::UnknownHorizon(s.to_string())),
        }
    }
}
