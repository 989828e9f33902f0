//! Growth projection engine: compound growth under periodic contributions

mod params;
mod engine;
mod series;

pub use params::{Cadence, GrowthParameters, DEFAULT_HORIZON_YEARS};
pub use engine::{accumulate, project, project_series, project_year, Accumulation};
pub use series::{milestone_year, GrowthPoint, GrowthSeries, GrowthSummary, DEFAULT_MILESTONE, GROWTH_CSV_HEADER};
