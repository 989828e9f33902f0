//! Load ticker records from a `stock_metrics` CSV export

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::Reader;

use super::ticker::{HorizonValues, TickerMetric};
use crate::error::{AnalyticsError, Result};

/// Raw CSV row matching the store's column layout. Empty cells are unavailable figures.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    ticker: String,
    #[serde(default)]
    name: Option<String>,
    cagr_3yr: Option<f64>,
    cagr_5yr: Option<f64>,
    cagr_10yr: Option<f64>,
    risk_3yr: Option<f64>,
    risk_5yr: Option<f64>,
    risk_10yr: Option<f64>,
    updated_at: String,
    earliest_datapoint: String,
}

impl CsvRow {
    fn into_ticker(self) -> Result<TickerMetric> {
        let earliest_data = parse_date(&self.earliest_datapoint).ok_or_else(|| {
            AnalyticsError::InvalidDate {
                ticker: self.ticker.clone(),
                value: self.earliest_datapoint.clone(),
            }
        })?;
        let last_updated = parse_timestamp(&self.updated_at).ok_or_else(|| {
            AnalyticsError::InvalidDate {
                ticker: self.ticker.clone(),
                value: self.updated_at.clone(),
            }
        })?;

        let mut ticker = TickerMetric::new(
            &self.ticker,
            self.name.as_deref().unwrap_or(""),
            earliest_data,
            last_updated,
        );
        ticker.cagr = HorizonValues::new(self.cagr_3yr, self.cagr_5yr, self.cagr_10yr);
        ticker.risk = HorizonValues::new(self.risk_3yr, self.risk_5yr, self.risk_10yr);
        Ok(ticker)
    }
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (taken as UTC) or a bare date (midnight UTC)
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Calendar date of any timestamp `parse_timestamp` accepts
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    parse_timestamp(value).map(|ts| ts.date_naive())
}

/// Load all ticker records from a CSV file
pub fn load_tickers<P: AsRef<Path>>(path: P) -> Result<Vec<TickerMetric>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load ticker records from any reader (e.g., string buffer, network stream)
pub fn load_tickers_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<TickerMetric>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<TickerMetric>> {
    let mut tickers = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        tickers.push(row.into_ticker()?);
    }

    log::debug!("loaded {} ticker records", tickers.len());
    Ok(tickers)
}
