//! Projection output structures

use serde::{Deserialize, Serialize};

use super::goal::GoalOutcome;
use super::trajectory::Trajectory;

/// One output record: what downstream charts, tables and exports consume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub period: usize,
    pub nominal: f64,
    pub real: Option<f64>,
}

/// Complete result of a single projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Nominal capital for periods 0..=N
    pub nominal: Trajectory,

    /// Inflation-adjusted capital, when inflation handling is on
    pub real: Option<Trajectory>,

    /// Target detection on the nominal trajectory
    pub goal: GoalOutcome,

    /// Growth rate applied per period
    pub periodic_rate: f64,

    pub periods_per_year: u32,

    pub contribution: f64,
}

impl ProjectionResult {
    /// Records for periods 0..=N
    pub fn rows(&self) -> Vec<ProjectionRow> {
        (0..self.nominal.len()).map(|t| self.row(t)).collect()
    }

    /// Last `n` records (all of them if `n` exceeds the horizon)
    pub fn tail(&self, n: usize) -> Vec<ProjectionRow> {
        let len = self.nominal.len();
        (len.saturating_sub(n)..len).map(|t| self.row(t)).collect()
    }

    fn row(&self, period: usize) -> ProjectionRow {
        ProjectionRow {
            period,
            nominal: self.nominal[period],
            real: self.real.as_ref().and_then(|r| r.get(period)),
        }
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let periods = self.nominal.periods();
        let total_contributions = self.nominal.start() + self.contribution * periods as f64;
        let final_nominal = self.nominal.final_value();

        ProjectionSummary {
            periods,
            final_nominal,
            final_real: self.real.as_ref().map(Trajectory::final_value),
            total_contributions,
            total_growth: final_nominal - total_contributions,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub periods: usize,
    pub final_nominal: f64,
    pub final_real: Option<f64>,
    /// Starting capital plus all periodic contributions
    pub total_contributions: f64,
    /// Compounding gain (negative in a decline scenario)
    pub total_growth: f64,
}
