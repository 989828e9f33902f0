//! Error types shared by the projection and metrics engines

use thiserror::Error;

/// Errors surfaced to callers of the engines and loaders.
///
/// Missing ticker data is never an error; it travels as `None` through every
/// aggregate. Only malformed input ends up here.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("non-finite {field} for '{ticker}' over {horizon}")]
    NonFinite {
        ticker: String,
        field: &'static str,
        horizon: String,
    },

    #[error("invalid date '{value}' for '{ticker}'")]
    InvalidDate { ticker: String, value: String },

    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown horizon '{0}', expected one of 3y, 5y, 10y")]
    UnknownHorizon(String),

    #[error("unknown cadence '{0}', expected weekly, fortnightly or monthly")]
    UnknownCadence(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
