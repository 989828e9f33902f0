//! Data-coverage warnings and the per-ticker table view
//!
//! A ticker whose history starts after the horizon's cutoff date is flagged as
//! immature. The flag is display-only: the ticker still takes part in every
//! computation. Cutoff arithmetic is calendar-naive.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::horizon::Horizon;
use super::stats::return_risk_ratio;
use super::ticker::TickerMetric;
use crate::error::{AnalyticsError, Result};
use crate::numeric::round2;

/// Days of slack granted before a short history is flagged
pub const MATURITY_GRACE_DAYS: i64 = 30;

/// `today - horizon years - 1 day + grace days`.
///
/// Month arithmetic clamps to the end of the month, so from 29 February the
/// cutoff starts at 28 February of the earlier year.
///
/// The grace moves the cutoff later, so a history up to `grace_days` short of
/// the horizon is not flagged. The old dashboard moved it earlier instead and
/// flagged more tickers.
pub fn maturity_cutoff(today: NaiveDate, horizon: Horizon, grace_days: i64) -> Option<NaiveDate> {
    today
        .checked_sub_months(Months::new(12 * horizon.years()))?
        .checked_sub_signed(Duration::days(1))?
        .checked_add_signed(Duration::days(grace_days))
}

/// True when the history starts after the cutoff for `horizon`
pub fn is_immature(earliest_data: NaiveDate, horizon: Horizon, today: NaiveDate) -> bool {
    is_immature_with_grace(earliest_data, horizon, today, MATURITY_GRACE_DAYS)
}

pub fn is_immature_with_grace(
    earliest_data: NaiveDate,
    horizon: Horizon,
    today: NaiveDate,
    grace_days: i64,
) -> bool {
    match maturity_cutoff(today, horizon, grace_days) {
        Some(cutoff) => earliest_data > cutoff,
        None => false,
    }
}

/// One table row per ticker, including those without figures for the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub ticker: String,
    pub name: String,
    pub cagr: Option<f64>,
    pub risk: Option<f64>,
    pub ratio: Option<f64>,
    pub earliest_data: NaiveDate,
    pub last_updated: DateTime<Utc>,
    pub immature: bool,
}

/// Table rows in input order. Values are rounded to 2 decimals; a ratio needs
/// both figures. Non-finite figures are rejected the same way the cohort
/// derivation rejects them.
pub fn metrics_table(
    tickers: &[TickerMetric],
    horizon: Horizon,
    today: NaiveDate,
    grace_days: i64,
) -> Result<Vec<MetricsRow>> {
    tickers
        .iter()
        .map(|t| {
            let cagr = t.cagr.get(horizon);
            let risk = t.risk.get(horizon);
            for (field, value) in [("cagr", cagr), ("risk", risk)] {
                if matches!(value, Some(v) if !v.is_finite()) {
                    return Err(AnalyticsError::NonFinite {
                        ticker: t.ticker.clone(),
                        field,
                        horizon: horizon.to_string(),
                    });
                }
            }

            Ok(MetricsRow {
                ticker: t.ticker.clone(),
                name: t.name.clone(),
                cagr: cagr.map(round2),
                risk: risk.map(round2),
                ratio: t.figures(horizon).map(|(c, r)| round2(return_risk_ratio(c, r))),
                earliest_data: t.earliest_data,
                last_updated: t.last_updated,
                immature: is_immature_with_grace(t.earliest_data, horizon, today, grace_days),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cutoff() {
        let today = date(2026, 10, 18);
        assert_eq!(maturity_cutoff(today, Horizon::ThreeYear, 30), Some(date(2023, 11, 16)));
        assert_eq!(maturity_cutoff(today, Horizon::TenYear, 0), Some(date(2016, 10, 17)));
    }

    #[test]
    fn test_cutoff_from_leap_day() {
        let today = date(2024, 2, 29);
        // 2021-02-28, minus a day, plus 30
        assert_eq!(maturity_cutoff(today, Horizon::ThreeYear, 30), Some(date(2021, 3, 29)));
    }

    #[test]
    fn test_immature_boundary() {
        let today = date(2026, 10, 18);
        assert!(!is_immature(date(2023, 11, 16), Horizon::ThreeYear, today));
        assert!(is_immature(date(2023, 11, 17), Horizon::ThreeYear, today));
        assert!(!is_immature(date(1999, 1, 4), Horizon::TenYear, today));
    }

    #[test]
    fn test_grace_period_forgives_short_gaps() {
        let today = date(2026, 10, 18);
        // Starts two weeks short of a full five years
        let earliest = date(2021, 11, 1);
        assert!(!is_immature(earliest, Horizon::FiveYear, today));
        assert!(is_immature_with_grace(earliest, Horizon::FiveYear, today, 0));
    }

    #[test]
    fn test_metrics_table_keeps_every_ticker() {
        let updated = Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap();
        let young = TickerMetric::new("NEW", "Newco", date(2025, 6, 2), updated)
            .with_figures(Horizon::ThreeYear, Some(40.0), None);
        let old = TickerMetric::new("OLD", "Oldco", date(2001, 6, 1), updated)
            .with_figures(Horizon::ThreeYear, Some(8.126), Some(16.0));

        let rows = metrics_table(&[young, old], Horizon::ThreeYear, date(2026, 10, 18), 30).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].ticker, "NEW");
        assert_eq!(rows[0].cagr, Some(40.0));
        assert_eq!(rows[0].ratio, None);
        assert!(rows[0].immature);

        assert_eq!(rows[1].cagr, Some(8.13));
        assert_eq!(rows[1].ratio, Some(0.51));
        assert!(!rows[1].immature);
    }

    #[test]
    fn test_metrics_table_rejects_non_finite() {
        let updated = Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap();
        let bad = TickerMetric::new("BAD", "", date(2001, 6, 1), updated)
            .with_figures(Horizon::FiveYear, Some(f64::NAN), Some(3.0));
        assert!(metrics_table(&[bad], Horizon::FiveYear, date(2026, 10, 18), 30).is_err());
    }
}
