//! Parameter set for a single projection run

use serde::{Deserialize, Serialize};

/// Default number of compounding periods per year (monthly)
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 12;

fn default_periods_per_year() -> u32 {
    DEFAULT_PERIODS_PER_YEAR
}

/// Financial inputs for one projection
///
/// Constructed once per request from validated input. The projection
/// functions assume [`SimulationParameters::validate`] has passed and do not
/// re-check ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Capital at period 0
    pub starting_capital: f64,

    /// Fixed amount added at the end of every period
    #[serde(default)]
    pub contribution: f64,

    /// Annual return (or the periodic rate when the engine runs in
    /// `RateMode::Periodic`)
    pub return_rate: f64,

    /// Fee / tax drag subtracted from the return
    #[serde(default)]
    pub fee_rate: f64,

    /// Compounding periods per year
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,

    /// Number of periods to simulate
    pub periods: u32,

    /// Annual inflation rate
    #[serde(default)]
    pub inflation_rate: f64,

    /// Target capital; `None` or a non-positive value disables goal tracking
    #[serde(default)]
    pub target_capital: Option<f64>,
}

impl SimulationParameters {
    /// Create parameters with no contribution, fees, inflation or target
    pub fn new(starting_capital: f64, return_rate: f64, periods: u32) -> Self {
        Self {
            starting_capital,
            contribution: 0.0,
            return_rate,
            fee_rate: 0.0,
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            periods,
            inflation_rate: 0.0,
            target_capital: None,
        }
    }

    pub fn with_contribution(mut self, contribution: f64) -> Self {
        self.contribution = contribution;
        self
    }

    pub fn with_fee_rate(mut self, fee_rate: f64) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    pub fn with_periods_per_year(mut self, periods_per_year: u32) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }

    pub fn with_inflation_rate(mut self, inflation_rate: f64) -> Self {
        self.inflation_rate = inflation_rate;
        self
    }

    pub fn with_target_capital(mut self, target_capital: f64) -> Self {
        self.target_capital = Some(target_capital);
        self
    }

    /// Set the horizon as whole years at the current periods-per-year
    pub fn with_horizon_years(mut self, years: u32) -> Self {
        self.periods = years.saturating_mul(self.periods_per_year);
        self
    }

    /// Same parameters with a different return rate (used for scenarios)
    pub fn with_return_rate(&self, return_rate: f64) -> Self {
        Self {
            return_rate,
            ..self.clone()
        }
    }

    /// Effective annual return after fee drag
    pub fn effective_return(&self) -> f64 {
        self.return_rate - self.fee_rate
    }

    /// Target capital if goal tracking is enabled (target > 0)
    pub fn goal_target(&self) -> Option<f64> {
        self.target_capital.filter(|&z| z > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SimulationParameters::new(1000.0, 0.05, 120);
        assert_eq!(params.periods_per_year, 12);
        assert_eq!(params.contribution, 0.0);
        assert!(params.goal_target().is_none());
    }

    #[test]
    fn test_goal_target_disabled_for_non_positive() {
        let params = SimulationParameters::new(1000.0, 0.05, 12).with_target_capital(0.0);
        assert!(params.goal_target().is_none());

        let params = params.with_target_capital(-5.0);
        assert!(params.goal_target().is_none());

        let params = params.with_target_capital(2000.0);
        assert_eq!(params.goal_target(), Some(2000.0));
    }

    #[test]
    fn test_horizon_years() {
        let params = SimulationParameters::new(1100.0, 0.05, 0)
            .with_periods_per_year(4)
            .with_horizon_years(10);
        assert_eq!(params.periods, 40);
    }

    #[test]
    fn test_effective_return() {
        let params = SimulationParameters::new(0.0, 0.07, 12).with_fee_rate(0.015);
        assert!((params.effective_return() - 0.055).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"starting_capital": 500.0, "return_rate": 0.04, "periods": 24}"#;
        let params: SimulationParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.periods_per_year, 12);
        assert_eq!(params.fee_rate, 0.0);
        assert_eq!(params.target_capital, None);
    }
}
