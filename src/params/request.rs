//! JSON projection requests
//!
//! A request carries the parameters, the explicit mode selection and an
//! optional list of scenario rates. Optional fields fall back to serde
//! defaults; the horizon may be given in periods or in whole years.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::data::DEFAULT_PERIODS_PER_YEAR;
use super::{ParameterError, SimulationParameters};
use crate::error::Result;
use crate::projection::{InflationMode, ProjectionConfig, RateMode};

fn default_periods_per_year() -> u32 {
    DEFAULT_PERIODS_PER_YEAR
}

/// Input configuration for a projection or scenario comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub starting_capital: f64,

    /// Periodic contribution (default: 0)
    #[serde(default)]
    pub contribution: f64,

    pub return_rate: f64,

    /// Fee / tax drag (default: 0)
    #[serde(default)]
    pub fee_rate: f64,

    /// Compounding periods per year (default: 12)
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,

    /// Horizon in periods; takes precedence over `years`
    #[serde(default)]
    pub periods: Option<u32>,

    /// Horizon in whole years
    #[serde(default)]
    pub years: Option<u32>,

    /// Annual inflation (default: 0)
    #[serde(default)]
    pub inflation_rate: f64,

    #[serde(default)]
    pub target_capital: Option<f64>,

    #[serde(default)]
    pub rate_mode: RateMode,

    #[serde(default)]
    pub inflation_mode: InflationMode,

    /// Candidate rates for a scenario comparison, in display order
    #[serde(default)]
    pub scenario_rates: Vec<f64>,
}

impl ProjectionRequest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn config(&self) -> ProjectionConfig {
        ProjectionConfig::new(self.rate_mode, self.inflation_mode)
    }

    /// Validated parameters for this request
    pub fn parameters(&self) -> std::result::Result<SimulationParameters, ParameterError> {
        let params = SimulationParameters {
            starting_capital: self.starting_capital,
            contribution: self.contribution,
            return_rate: self.return_rate,
            fee_rate: self.fee_rate,
            periods_per_year: self.periods_per_year,
            periods: self.periods.unwrap_or(0),
            inflation_rate: self.inflation_rate,
            target_capital: self.target_capital,
        };
        let params = match (self.periods, self.years) {
            (Some(_), _) => params,
            (None, Some(years)) => params.with_horizon_years(years),
            (None, None) => return Err(ParameterError::MissingHorizon),
        };
        params.validate(self.rate_mode)?;

        for &rate in &self.scenario_rates {
            params.with_return_rate(rate).validate(self.rate_mode)?;
        }

        Ok(params)
    }
}
