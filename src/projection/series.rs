//! Year-indexed projection output, milestones and CSV export

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::params::GrowthParameters;
use crate::error::Result;
use crate::numeric::round2;

/// Default milestone: the first million
pub const DEFAULT_MILESTONE: f64 = 1_000_000.0;

/// CSV header for projection exports
pub const GROWTH_CSV_HEADER: [&str; 3] = ["Year", "Total", "Total Contributed"];

/// Projection state at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Elapsed years (1-indexed)
    pub year: u32,

    /// Contributions plus compounded growth
    pub total: f64,

    /// Principal plus every contribution to date
    #[serde(rename = "totalContributed")]
    pub total_contributed: f64,
}

impl GrowthPoint {
    /// Growth earned on top of the money put in
    pub fn gain(&self) -> f64 {
        round2(self.total - self.total_contributed)
    }
}

/// First year whose total reaches `threshold`; forward scan, first match wins
pub fn milestone_year(points: &[GrowthPoint], threshold: f64) -> Option<u32> {
    points.iter().find(|p| p.total >= threshold).map(|p| p.year)
}

/// Points from one projection run together with the parameters that produced them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSeries {
    pub params: GrowthParameters,
    pub points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    pub fn new(params: GrowthParameters, points: Vec<GrowthPoint>) -> Self {
        Self { params, points }
    }

    pub fn points(&self) -> &[GrowthPoint] {
        &self.points
    }

    pub fn final_point(&self) -> Option<&GrowthPoint> {
        self.points.last()
    }

    pub fn milestone_year(&self, threshold: f64) -> Option<u32> {
        milestone_year(&self.points, threshold)
    }

    /// Headline figures for the run
    pub fn summary(&self, milestone: f64) -> GrowthSummary {
        let final_total = self.final_point().map(|p| p.total).unwrap_or(self.params.principal);
        let final_contributed = self
            .final_point()
            .map(|p| p.total_contributed)
            .unwrap_or(self.params.principal);

        GrowthSummary {
            years: self.points.len() as u32,
            final_total,
            final_contributed,
            final_gain: round2(final_total - final_contributed),
            milestone,
            milestone_year: self.milestone_year(milestone),
        }
    }

    /// Write `Year,Total,Total Contributed` rows
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(GROWTH_CSV_HEADER)?;

        for point in &self.points {
            csv_writer.write_record([
                point.year.to_string(),
                point.total.to_string(),
                point.total_contributed.to_string(),
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

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub years: u32,
    pub final_total: f64,
    pub final_contributed: f64,
    pub final_gain: f64,
    pub milestone: f64,
    pub milestone_year: Option<u32>,
}
