//! Compound growth simulation with periodic contributions

use log::debug;

use super::params::GrowthParameters;
use super::series::{GrowthPoint, GrowthSeries};
use crate::error::Result;
use crate::numeric::round2;

/// Raw (unrounded) accumulators after a number of elapsed periods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulation {
    pub total: f64,
    pub total_contributed: f64,
}

/// Run the simulation for `periods` periods from scratch.
///
/// Each period adds one contribution to both accumulators, then grows the
/// total by `1 + rate / periods_per_year`.
pub fn accumulate(params: &GrowthParameters, periods: u64) -> Accumulation {
    let growth = params.period_growth_factor();
    let mut total = params.principal;
    let mut total_contributed = params.principal;

    for _ in 0..periods {
        total_contributed += params.contribution;
        total += params.contribution;
        total *= growth;
    }

    Accumulation {
        total,
        total_contributed,
    }
}

/// Value of the investment at the end of `year`, rounded to cents.
///
/// Recomputed from the start so no rounding error carries between years.
pub fn project_year(params: &GrowthParameters, year: u32) -> GrowthPoint {
    let periods = year as u64 * params.cadence.periods_per_year() as u64;
    let acc = accumulate(params, periods);

    GrowthPoint {
        year,
        total: round2(acc.total),
        total_contributed: round2(acc.total_contributed),
    }
}

/// Project one point per year over the horizon. A zero horizon yields no points.
pub fn project(params: &GrowthParameters) -> Result<Vec<GrowthPoint>> {
    params.validate()?;

    let points: Vec<GrowthPoint> = (1..=params.horizon_years)
        .map(|year| project_year(params, year))
        .collect();

    debug!(
        "projected {} years at {:.4} ({}), final total {:?}",
        points.len(),
        params.annual_rate,
        params.cadence,
        points.last().map(|p| p.total)
    );

    Ok(points)
}

/// Project and keep the parameters alongside the points
pub fn project_series(params: &GrowthParameters) -> Result<GrowthSeries> {
    let points = project(params)?;
    Ok(GrowthSeries::new(params.clone(), points))
}
