//! Comparative metrics engine: ratios, cohort means, rank colors and coverage flags

mod horizon;
mod ticker;
mod stats;
mod maturity;
pub mod history;
pub mod loader;

pub use horizon::Horizon;
pub use ticker::{normalize_symbol, prepare_cohort, HorizonValues, TickerMetric, MAX_COHORT_SIZE};
pub use stats::{
    derive_report, derive_report_with, derive_stats, return_risk_ratio, CohortReport,
    CohortSummary, DerivedTickerStat, METRICS_CSV_HEADER, MIN_RATIO_RANGE,
    ZERO_RISK_RATIO_MULTIPLIER,
};
pub use maturity::{
    is_immature, is_immature_with_grace, maturity_cutoff, metrics_table, MetricsRow,
    MATURITY_GRACE_DAYS,
};
pub use loader::{load_tickers, load_tickers_from_reader};
