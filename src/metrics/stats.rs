//! Return/risk ratios, cohort means and gradient ranking

use std::io::Write;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::horizon::Horizon;
use super::ticker::TickerMetric;
use crate::error::{AnalyticsError, Result};
use crate::numeric::{mean, round2, ColorGradient};

/// Multiplier standing in for CAGR / risk when risk is zero.
///
/// Not a financial ratio. It pushes zero-volatility tickers to the far end of
/// the ranking without dividing by zero: positive CAGR lands at the "good"
/// end, negative CAGR at the "poor" end.
pub const ZERO_RISK_RATIO_MULTIPLIER: f64 = 1000.0;

/// Floor for `max - min` when normalizing ratios. A single ticker or a cohort
/// of equal ratios puts every ticker at position 0.
pub const MIN_RATIO_RANGE: f64 = 1e-6;

/// CSV header for cohort exports
pub const METRICS_CSV_HEADER: [&str; 5] = ["Ticker", "Name", "Risk (%)", "CAGR (%)", "Return/Risk"];

/// `cagr / risk`, or `cagr * 1000` when risk is not positive
pub fn return_risk_ratio(cagr: f64, risk: f64) -> f64 {
    if risk > 0.0 {
        cagr / risk
    } else {
        cagr * ZERO_RISK_RATIO_MULTIPLIER
    }
}

/// Comparison figures for one participating ticker, all rounded to 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTickerStat {
    pub ticker: String,
    pub name: String,
    pub risk: f64,
    #[serde(rename = "return")]
    pub cagr: f64,
    pub ratio: f64,

    /// Rank position in [0, 1] among the cohort's ratios
    pub position: f64,

    /// `#rrggbb` gradient color for `position`
    pub color: String,

    /// Ratio came from the zero-risk multiplier
    pub zero_risk: bool,
}

/// Cohort means; `None` when no ticker participates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    pub participants: usize,
    pub mean_return: Option<f64>,
    pub mean_risk: Option<f64>,
    pub mean_ratio: Option<f64>,
}

/// Everything derived for one cohort and horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortReport {
    pub horizon: Horizon,
    pub stats: Vec<DerivedTickerStat>,
    pub summary: CohortSummary,

    /// Tickers lacking CAGR or risk for the horizon
    pub unavailable: Vec<String>,
}

impl CohortReport {
    pub fn stat(&self, ticker: &str) -> Option<&DerivedTickerStat> {
        self.stats.iter().find(|s| s.ticker == ticker)
    }

    /// Lowest and highest ratio, for the gradient legend
    pub fn ratio_range(&self) -> Option<(f64, f64)> {
        ratio_bounds(self.stats.iter().map(|s| s.ratio))
    }

    /// Write `Ticker,Name,Risk (%),CAGR (%),Return/Risk` rows for participants
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(METRICS_CSV_HEADER)?;

        for stat in &self.stats {
            csv_writer.write_record([
                stat.ticker.clone(),
                stat.name.clone(),
                stat.risk.to_string(),
                stat.cagr.to_string(),
                stat.ratio.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Per-ticker stats and cohort means for `horizon`
pub fn derive_stats(
    tickers: &[TickerMetric],
    horizon: Horizon,
) -> Result<(Vec<DerivedTickerStat>, CohortSummary)> {
    let report = derive_report(tickers, horizon)?;
    Ok((report.stats, report.summary))
}

pub fn derive_report(tickers: &[TickerMetric], horizon: Horizon) -> Result<CohortReport> {
    derive_report_with(tickers, horizon, &ColorGradient::default())
}

/// Full derivation with a custom gradient.
///
/// Tickers missing either figure are listed in `unavailable` and left out of
/// every aggregate. Non-finite figures are an error.
pub fn derive_report_with(
    tickers: &[TickerMetric],
    horizon: Horizon,
    gradient: &ColorGradient,
) -> Result<CohortReport> {
    let mut stats = Vec::with_capacity(tickers.len());
    let mut pinned = Vec::with_capacity(tickers.len());
    let mut unavailable = Vec::new();

    for ticker in tickers {
        check_finite(ticker, "cagr", ticker.cagr.get(horizon), horizon)?;
        check_finite(ticker, "risk", ticker.risk.get(horizon), horizon)?;

        let Some((cagr, risk)) = ticker.figures(horizon) else {
            warn!("{} has no {} figures, excluded from cohort", ticker.ticker, horizon);
            unavailable.push(ticker.ticker.clone());
            continue;
        };

        let ratio = return_risk_ratio(cagr, risk);
        check_finite(ticker, "return/risk ratio", Some(ratio), horizon)?;

        // Decided on the raw figures: a gain too small to survive rounding still pins
        pinned.push(risk <= 0.0 && cagr > 0.0);
        stats.push(DerivedTickerStat {
            ticker: ticker.ticker.clone(),
            name: ticker.name.clone(),
            risk: round2(risk),
            cagr: round2(cagr),
            ratio: round2(ratio),
            position: 0.0,
            color: String::new(),
            zero_risk: risk <= 0.0,
        });
    }

    rank(&mut stats, &pinned, gradient);
    let summary = summarize(&stats);

    debug!(
        "derived {} stats for {} ({} unavailable)",
        stats.len(),
        horizon,
        unavailable.len()
    );

    Ok(CohortReport {
        horizon,
        stats,
        summary,
        unavailable,
    })
}

/// Assign rank positions and colors from the rounded ratios. `pinned` marks
/// zero-volatility gainers, which always take position 1.
fn rank(stats: &mut [DerivedTickerStat], pinned: &[bool], gradient: &ColorGradient) {
    let Some((min, max)) = ratio_bounds(stats.iter().map(|s| s.ratio)) else {
        return;
    };
    let range = (max - min).max(MIN_RATIO_RANGE);

    for (stat, &pin) in stats.iter_mut().zip(pinned) {
        stat.position = if pin {
            1.0
        } else {
            ((stat.ratio - min) / range).clamp(0.0, 1.0)
        };
        stat.color = gradient.color_at(stat.position).to_hex();
    }
}

fn summarize(stats: &[DerivedTickerStat]) -> CohortSummary {
    let returns: Vec<f64> = stats.iter().map(|s| s.cagr).collect();
    let risks: Vec<f64> = stats.iter().map(|s| s.risk).collect();
    let ratios: Vec<f64> = stats.iter().map(|s| s.ratio).collect();

    CohortSummary {
        participants: stats.len(),
        mean_return: mean(&returns).map(round2),
        mean_risk: mean(&risks).map(round2),
        mean_ratio: mean(&ratios).map(round2),
    }
}

fn ratio_bounds(ratios: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    ratios.fold(None, |bounds, r| match bounds {
        None => Some((r, r)),
        Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
    })
}

fn check_finite(
    ticker: &TickerMetric,
    field: &'static str,
    value: Option<f64>,
    horizon: Horizon,
) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() => Err(AnalyticsError::NonFinite {
            ticker: ticker.ticker.clone(),
            field,
            horizon: horizon.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn ticker(symbol: &str, cagr: Option<f64>, risk: Option<f64>) -> TickerMetric {
        TickerMetric::new(
            symbol,
            &format!("{symbol} Inc."),
            NaiveDate::from_ymd_opt(2005, 1, 3).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 17, 21, 0, 0).unwrap(),
        )
        .with_figures(Horizon::ThreeYear, cagr, risk)
    }

    #[test]
    fn test_ratio_and_sentinel() {
        assert_relative_eq!(return_risk_ratio(20.0, 10.0), 2.0);
        assert_relative_eq!(return_risk_ratio(5.0, 0.0), 5_000.0);
        assert_relative_eq!(return_risk_ratio(-2.0, 0.0), -2_000.0);
    }

    #[test]
    fn test_derive_basic_cohort() {
        let tickers = vec![
            ticker("AAA", Some(10.0), Some(20.0)),
            ticker("BBB", Some(30.0), Some(20.0)),
            ticker("CCC", Some(20.0), Some(20.0)),
        ];
        let report = derive_report(&tickers, Horizon::ThreeYear).unwrap();

        let aaa = report.stat("AAA").unwrap();
        let bbb = report.stat("BBB").unwrap();
        let ccc = report.stat("CCC").unwrap();
        assert_eq!(aaa.ratio, 0.5);
        assert_eq!(bbb.ratio, 1.5);
        assert_eq!(aaa.position, 0.0);
        assert_eq!(bbb.position, 1.0);
        assert_relative_eq!(ccc.position, 0.5);
        assert_eq!(aaa.color, "#ef4444");
        assert_eq!(ccc.color, "#f59e0b");
        assert_eq!(bbb.color, "#16a34a");

        assert_eq!(report.summary.participants, 3);
        assert_eq!(report.summary.mean_return, Some(20.0));
        assert_eq!(report.summary.mean_risk, Some(20.0));
        assert_eq!(report.summary.mean_ratio, Some(1.0));
        assert!(report.unavailable.is_empty());
        assert_eq!(report.ratio_range(), Some((0.5, 1.5)));
    }

    #[test]
    fn test_values_are_rounded_before_ranking() {
        let tickers = vec![
            ticker("AAA", Some(12.3456), Some(10.0)),
            ticker("BBB", Some(12.3449), Some(10.0)),
        ];
        let (stats, _) = derive_stats(&tickers, Horizon::ThreeYear).unwrap();
        assert_eq!(stats[0].cagr, 12.35);
        assert_eq!(stats[1].cagr, 12.34);
        // 1.23456 and 1.23449 both round to 1.23: tied, same color
        assert_eq!(stats[0].ratio, stats[1].ratio);
        assert_eq!(stats[0].color, stats[1].color);
    }

    #[test]
    fn test_zero_risk_positive_return_ranks_best() {
        let tickers = vec![
            ticker("CASH", Some(0.5), Some(0.0)),
            ticker("HOT", Some(80.0), Some(0.01)),
            ticker("MID", Some(10.0), Some(15.0)),
        ];
        let (stats, _) = derive_stats(&tickers, Horizon::ThreeYear).unwrap();
        let cash = stats.iter().find(|s| s.ticker == "CASH").unwrap();
        assert!(cash.zero_risk);
        assert_eq!(cash.ratio, 500.0);
        assert_eq!(cash.position, 1.0);
        assert_eq!(cash.color, "#16a34a");
    }

    #[test]
    fn test_zero_risk_tiny_gain_still_ranks_best() {
        // 0.004% rounds to 0.00 but is still a gain with no volatility
        let tickers = vec![
            ticker("SAFE", Some(0.004), Some(0.0)),
            ticker("HI", Some(20.0), Some(2.0)),
            ticker("LO", Some(1.0), Some(10.0)),
        ];
        let report = derive_report(&tickers, Horizon::ThreeYear).unwrap();
        let safe = report.stat("SAFE").unwrap();
        assert_eq!(safe.cagr, 0.0);
        assert!(safe.zero_risk);
        assert_eq!(safe.position, 1.0);
        assert_eq!(safe.color, "#16a34a");
    }

    #[test]
    fn test_single_zero_risk_ticker_ranks_best() {
        let tickers = vec![ticker("CASH", Some(3.0), Some(0.0))];
        let (stats, _) = derive_stats(&tickers, Horizon::ThreeYear).unwrap();
        assert_eq!(stats[0].position, 1.0);
    }

    #[test]
    fn test_zero_risk_negative_return_ranks_worst() {
        let tickers = vec![
            ticker("DEAD", Some(-1.0), Some(0.0)),
            ticker("OK", Some(5.0), Some(10.0)),
        ];
        let (stats, _) = derive_stats(&tickers, Horizon::ThreeYear).unwrap();
        assert_eq!(stats[0].ratio, -1_000.0);
        assert_eq!(stats[0].position, 0.0);
        assert_eq!(stats[1].position, 1.0);
    }

    #[test]
    fn test_equal_ratios_share_a_color() {
        let tickers = vec![
            ticker("AAA", Some(10.0), Some(20.0)),
            ticker("BBB", Some(5.0), Some(10.0)),
            ticker("CCC", Some(1.0), Some(2.0)),
        ];
        let (stats, _) = derive_stats(&tickers, Horizon::ThreeYear).unwrap();
        assert!(stats.iter().all(|s| s.position == 0.0));
        assert!(stats.iter().all(|s| s.color == stats[0].color));
    }

    #[test]
    fn test_missing_figures_are_excluded_not_zeroed() {
        let full = vec![
            ticker("AAA", Some(10.0), Some(20.0)),
            ticker("BBB", Some(30.0), Some(10.0)),
        ];
        let mut with_gaps = full.clone();
        with_gaps.push(ticker("NOCAGR", None, Some(12.0)));
        with_gaps.push(ticker("NORISK", Some(9.0), None));

        let report = derive_report(&with_gaps, Horizon::ThreeYear).unwrap();
        let (_, baseline) = derive_stats(&full, Horizon::ThreeYear).unwrap();

        assert_eq!(report.summary, baseline);
        assert_eq!(report.unavailable, vec!["NOCAGR".to_string(), "NORISK".to_string()]);
        assert_eq!(report.stats.len(), 2);
    }

    #[test]
    fn test_empty_cohort_reports_unavailable_means() {
        let tickers = vec![ticker("AAA", None, None)];
        let report = derive_report(&tickers, Horizon::ThreeYear).unwrap();
        assert!(report.stats.is_empty());
        assert_eq!(report.summary.participants, 0);
        assert_eq!(report.summary.mean_return, None);
        assert_eq!(report.summary.mean_ratio, None);
        assert_eq!(report.ratio_range(), None);
    }

    #[test]
    fn test_other_horizons_are_ignored() {
        let t = ticker("AAA", Some(10.0), Some(20.0));
        let report = derive_report(&[t], Horizon::TenYear).unwrap();
        assert!(report.stats.is_empty());
        assert_eq!(report.unavailable, vec!["AAA".to_string()]);
    }

    #[test]
    fn test_non_finite_input_is_an_error() {
        let tickers = vec![
            ticker("AAA", Some(10.0), Some(20.0)),
            ticker("BAD", Some(f64::NAN), Some(20.0)),
        ];
        let err = derive_stats(&tickers, Horizon::ThreeYear).unwrap_err();
        match err {
            AnalyticsError::NonFinite { ticker, field, .. } => {
                assert_eq!(ticker, "BAD");
                assert_eq!(field, "cagr");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_even_when_partner_is_missing() {
        let tickers = vec![ticker("BAD", None, Some(f64::INFINITY))];
        assert!(derive_stats(&tickers, Horizon::ThreeYear).is_err());
    }

    #[test]
    fn test_csv_export() {
        let tickers = vec![
            ticker("AAA", Some(12.3449), Some(20.0)),
            ticker("BBB", None, Some(10.0)),
        ];
        let report = derive_report(&tickers, Horizon::ThreeYear).unwrap();
        let csv = report.to_csv_string().unwrap();
        assert_eq!(
            csv,
            "Ticker,Name,Risk (%),CAGR (%),Return/Risk\nAAA,AAA Inc.,20,12.34,0.62\n"
        );
    }

    #[test]
    fn test_custom_gradient() {
        let gradient = ColorGradient::new(
            crate::numeric::Rgb::new(0, 0, 0),
            crate::numeric::Rgb::new(128, 128, 128),
            crate::numeric::Rgb::new(255, 255, 255),
        );
        let tickers = vec![
            ticker("AAA", Some(1.0), Some(10.0)),
            ticker("BBB", Some(9.0), Some(10.0)),
        ];
        let report = derive_report_with(&tickers, Horizon::ThreeYear, &gradient).unwrap();
        assert_eq!(report.stats[0].color, "#000000");
        assert_eq!(report.stats[1].color, "#ffffff");
    }
}
