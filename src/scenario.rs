//! Scenario runner for batches of growth projections
//!
//! Holds a base parameter set and re-runs the projection with one input
//! varied. Every run is independent, so batches fan out across threads and
//! come back in input order.

use rayon::prelude::*;

use crate::error::Result;
use crate::projection::{project_series, Cadence, GrowthParameters, GrowthSeries};

/// Pre-configured runner for what-if projections
///
/// # Example
/// ```
/// use growth_analytics::ScenarioRunner;
///
/// let runner = ScenarioRunner::default();
/// let results = runner.run_rates(&[0.03, 0.05, 0.07]).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base: GrowthParameters,
}

impl ScenarioRunner {
    /// Create runner around validated base parameters
    pub fn new(base: GrowthParameters) -> Result<Self> {
        base.validate()?;
        Ok(Self { base })
    }

    /// Project the base parameters
    pub fn run(&self) -> Result<GrowthSeries> {
        project_series(&self.base)
    }

    /// One projection per annual rate, everything else from the base
    pub fn run_rates(&self, rates: &[f64]) -> Result<Vec<GrowthSeries>> {
        let params: Vec<GrowthParameters> = rates.iter().map(|&r| self.base.with_rate(r)).collect();
        self.run_batch(&params)
    }

    /// One projection per contribution cadence
    pub fn run_cadences(&self) -> Result<Vec<GrowthSeries>> {
        let params: Vec<GrowthParameters> = Cadence::ALL
            .iter()
            .map(|&c| self.base.with_cadence(c))
            .collect();
        self.run_batch(&params)
    }

    /// Run arbitrary parameter sets in parallel. Fails on the first invalid set.
    pub fn run_batch(&self, params: &[GrowthParameters]) -> Result<Vec<GrowthSeries>> {
        params.par_iter().map(project_series).collect()
    }

    pub fn base(&self) -> &GrowthParameters {
        &self.base
    }
}
