//! Per-ticker CAGR and risk records supplied by the data store

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use super::horizon::Horizon;

/// Most tickers compared at once
pub const MAX_COHORT_SIZE: usize = 10;

/// One optional value per horizon; `None` means the store has no figure
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizonValues {
    #[serde(rename = "3y")]
    pub three_year: Option<f64>,
    #[serde(rename = "5y")]
    pub five_year: Option<f64>,
    #[serde(rename = "10y")]
    pub ten_year: Option<f64>,
}

impl HorizonValues {
    pub fn new(three_year: Option<f64>, five_year: Option<f64>, ten_year: Option<f64>) -> Self {
        Self {
            three_year,
            five_year,
            ten_year,
        }
    }

    pub fn get(&self, horizon: Horizon) -> Option<f64> {
        match horizon {
            Horizon::ThreeYear => self.three_year,
            Horizon::FiveYear => self.five_year,
            Horizon::TenYear => self.ten_year,
        }
    }

    pub fn set(&mut self, horizon: Horizon, value: Option<f64>) {
        match horizon {
            Horizon::ThreeYear => self.three_year = value,
            Horizon::FiveYear => self.five_year = value,
            Horizon::TenYear => self.ten_year = value,
        }
    }
}

/// A ticker's precomputed figures. The engines only read these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMetric {
    /// Upper-case symbol, unique within a cohort
    pub ticker: String,

    /// Display name
    pub name: String,

    /// Compound annual growth rate in percent, per horizon
    pub cagr: HorizonValues,

    /// Annualized volatility in percent, per horizon
    pub risk: HorizonValues,

    /// First day covered by the price history
    pub earliest_data: NaiveDate,

    /// When the store last refreshed the figures
    pub last_updated: DateTime<Utc>,
}

impl TickerMetric {
    /// Record with no figures yet; the symbol is trimmed and upper-cased
    pub fn new(
        ticker: &str,
        name: &str,
        earliest_data: NaiveDate,
        last_updated: DateTime<Utc>,
    ) -> Self {
        let ticker = normalize_symbol(ticker);
        let name = if name.trim().is_empty() {
            ticker.clone()
        } else {
            name.trim().to_string()
        };

        Self {
            ticker,
            name,
            cagr: HorizonValues::default(),
            risk: HorizonValues::default(),
            earliest_data,
            last_updated,
        }
    }

    /// Builder-style setter for one horizon's CAGR and risk
    pub fn with_figures(mut self, horizon: Horizon, cagr: Option<f64>, risk: Option<f64>) -> Self {
        self.cagr.set(horizon, cagr);
        self.risk.set(horizon, risk);
        self
    }

    /// Both figures for a horizon, or `None` if either is missing
    pub fn figures(&self, horizon: Horizon) -> Option<(f64, f64)> {
        Some((self.cagr.get(horizon)?, self.risk.get(horizon)?))
    }
}

pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

/// Order a selection the way the dashboard shows it: sorted by symbol,
/// duplicates dropped, capped at `max_size`.
pub fn prepare_cohort(mut tickers: Vec<TickerMetric>, max_size: usize) -> Vec<TickerMetric> {
    tickers.sort_by(|a, b| a.ticker.cmp(&b.ticker));
    tickers.dedup_by(|later, earlier| later.ticker == earlier.ticker);

    if tickers.len() > max_size {
        warn!(
            "cohort of {} tickers exceeds the cap of {}, dropping {:?}",
            tickers.len(),
            max_size,
            tickers[max_size..].iter().map(|t| t.ticker.as_str()).collect::<Vec<_>>()
        );
        tickers.truncate(max_size);
    }

    tickers
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ticker(symbol: &str) -> TickerMetric {
        TickerMetric::new(
            symbol,
            "",
            NaiveDate::from_ymd_opt(2010, 1, 4).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_normalizes_symbol_and_defaults_name() {
        let t = ticker("  aapl ");
        assert_eq!(t.ticker, "AAPL");
        assert_eq!(t.name, "AAPL");
    }

    #[test]
    fn test_figures_require_both_values() {
        let t = ticker("MSFT")
            .with_figures(Horizon::ThreeYear, Some(21.5), Some(24.0))
            .with_figures(Horizon::FiveYear, Some(18.0), None);

        assert_eq!(t.figures(Horizon::ThreeYear), Some((21.5, 24.0)));
        assert_eq!(t.figures(Horizon::FiveYear), None);
        assert_eq!(t.figures(Horizon::TenYear), None);
        assert_eq!(t.cagr.get(Horizon::FiveYear), Some(18.0));
    }

    #[test]
    fn test_prepare_cohort_sorts_dedups_and_caps() {
        let tickers: Vec<TickerMetric> = ["NVDA", "AAPL", "MSFT", "AAPL"]
            .iter()
            .map(|s| ticker(s))
            .collect();

        let cohort = prepare_cohort(tickers, 2);
        let symbols: Vec<&str> = cohort.iter().map(|t| t.ticker.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_prepare_cohort_under_cap_keeps_everything() {
        let tickers: Vec<TickerMetric> = ["B", "A"].iter().map(|s| ticker(s)).collect();
        assert_eq!(prepare_cohort(tickers, MAX_COHORT_SIZE).len(), 2);
    }
}
