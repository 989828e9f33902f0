//! Build ticker records from a daily close-price history
//!
//! For each horizon the window holds every close on or after
//! `today - years * 365 days`. CAGR is annualized over the calendar time since
//! the window's first close; risk is the sample standard deviation of daily
//! simple returns scaled by the square root of 252 trading days.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::horizon::Horizon;
use super::ticker::TickerMetric;
use crate::error::{AnalyticsError, Result};

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

const DAYS_PER_YEAR: f64 = 365.25;

/// One daily adjusted close
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosePrice {
    pub date: NaiveDate,
    pub close: f64,
}

/// CAGR and risk for one horizon window, both in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowMetrics {
    pub first_date: NaiveDate,
    pub years_of_data: f64,
    pub cagr: f64,
    pub risk: f64,
}

/// Metrics over the horizon's window, `None` when the window holds fewer than
/// two daily returns or starts today.
pub fn window_metrics(
    prices: &[ClosePrice],
    horizon: Horizon,
    today: NaiveDate,
) -> Result<Option<WindowMetrics>> {
    validate_prices(prices)?;

    let start = today - Duration::days(365 * horizon.years() as i64);
    let mut window: Vec<ClosePrice> = prices
        .iter()
        .copied()
        .filter(|p| p.date >= start && p.date <= today)
        .collect();
    window.sort_by_key(|p| p.date);

    if window.len() < 3 {
        return Ok(None);
    }

    let first = window[0];
    let last = window[window.len() - 1];
    let years_of_data = (today - first.date).num_days() as f64 / DAYS_PER_YEAR;
    if years_of_data <= 0.0 {
        return Ok(None);
    }

    let returns: Vec<f64> = window
        .windows(2)
        .map(|pair| pair[1].close / pair[0].close - 1.0)
        .collect();

    let cagr = ((last.close / first.close).powf(1.0 / years_of_data) - 1.0) * 100.0;
    let risk = sample_std(&returns) * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;

    Ok(Some(WindowMetrics {
        first_date: first.date,
        years_of_data,
        cagr,
        risk,
    }))
}

/// Ticker record with figures for every horizon that has enough history.
///
/// The earliest-data date is the first close of the whole series. Returns
/// `None` when no horizon has enough data.
pub fn ticker_from_history(
    ticker: &str,
    name: &str,
    prices: &[ClosePrice],
    today: NaiveDate,
    last_updated: DateTime<Utc>,
) -> Result<Option<TickerMetric>> {
    let mut figures = Vec::with_capacity(Horizon::ALL.len());
    for horizon in Horizon::ALL {
        figures.push((horizon, window_metrics(prices, horizon, today)?));
    }

    if figures.iter().all(|(_, m)| m.is_none()) {
        log::debug!("{}: not enough history for any horizon", ticker);
        return Ok(None);
    }
    let Some(earliest_data) = prices.iter().map(|p| p.date).min() else {
        return Ok(None);
    };

    let record = figures.into_iter().fold(
        TickerMetric::new(ticker, name, earliest_data, last_updated),
        |record, (horizon, metrics)| {
            record.with_figures(horizon, metrics.map(|m| m.cagr), metrics.map(|m| m.risk))
        },
    );
    Ok(Some(record))
}

/// Standard deviation with an `n - 1` denominator
fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

fn validate_prices(prices: &[ClosePrice]) -> Result<()> {
    for price in prices {
        if !price.close.is_finite() || price.close <= 0.0 {
            return Err(AnalyticsError::InvalidParameter {
                name: "close",
                value: price.close,
                reason: "closes must be finite and positive",
            });
        }
    }
    Ok(())
}
