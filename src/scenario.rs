//! Scenario runner for comparing candidate return rates
//!
//! Every candidate shares the base parameters and differs only in the return
//! rate. Candidates are computed independently, so they can be fanned out
//! across threads; output always follows the caller's order.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::params::SimulationParameters;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, Trajectory};

/// One candidate rate and its projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Candidate return rate (the scenario label)
    pub rate: f64,
    pub result: ProjectionResult,
}

impl Scenario {
    /// Nominal trajectory for this candidate
    pub fn trajectory(&self) -> &Trajectory {
        &self.result.nominal
    }
}

/// Aligned trajectories for a set of candidate rates, in caller order
///
/// Rates are neither sorted nor deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    /// Candidate rates in caller order
    pub fn rates(&self) -> Vec<f64> {
        self.scenarios.iter().map(|s| s.rate).collect()
    }

    /// First scenario labelled with `rate`
    pub fn get(&self, rate: f64) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.rate == rate)
    }

    /// Shared trajectory length (periods + 1), `None` for an empty set
    pub fn trajectory_len(&self) -> Option<usize> {
        self.scenarios.first().map(|s| s.trajectory().len())
    }
}

/// Runs the same base parameters under many candidate rates
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::default());
/// let base = SimulationParameters::new(1100.0, 0.05, 120).with_contribution(100.0);
/// let set = runner.run(&base, &[0.03, 0.05, 0.07]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single candidate against the base parameters
    pub fn run_one(&self, base: &SimulationParameters, rate: f64) -> Scenario {
        Scenario {
            rate,
            result: self.engine.project(&base.with_return_rate(rate)),
        }
    }

    /// Run all candidates sequentially
    pub fn run(&self, base: &SimulationParameters, rates: &[f64]) -> ScenarioSet {
        info!("running {} scenarios over {} periods", rates.len(), base.periods);
        let scenarios = rates.iter().map(|&rate| self.run_one(base, rate)).collect();
        ScenarioSet { scenarios }
    }

    /// Run all candidates in parallel; same output as [`ScenarioRunner::run`]
    pub fn run_parallel(&self, base: &SimulationParameters, rates: &[f64]) -> ScenarioSet {
        info!("running {} scenarios in parallel over {} periods", rates.len(), base.periods);
        let scenarios = rates.par_iter().map(|&rate| self.run_one(base, rate)).collect();
        ScenarioSet { scenarios }
    }
}
