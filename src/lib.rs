//! Growth Analytics - compound growth forecasts and ticker risk/return comparisons
//!
//! This library provides:
//! - Year-by-year compound growth projections with periodic contributions
//! - Milestone detection and CSV export of projection series
//! - Return/risk ratios, cohort means and gradient ranking for ticker cohorts
//! - Data-coverage (maturity) flags per analytics horizon
//! - CAGR and volatility derived from daily close histories
//! - Parallel what-if scenario batches

pub mod error;
pub mod numeric;
pub mod projection;
pub mod metrics;
pub mod config;
pub mod scenario;
pub mod themes;

// Re-export commonly used types
pub use error::{AnalyticsError, Result};
pub use numeric::{ColorGradient, Rgb};
pub use projection::{project, project_series, Cadence, GrowthParameters, GrowthPoint, GrowthSeries};
pub use metrics::{derive_report, derive_stats, CohortReport, CohortSummary, DerivedTickerStat, Horizon, TickerMetric};
pub use config::DashboardConfig;
pub use scenario::ScenarioRunner;
