//! Projection engine: rate conversion, growth, inflation and goal detection
//! composed into a single run

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::params::SimulationParameters;
use super::goal::{track_goal, GoalOutcome};
use super::growth;
use super::inflation::{self, InflationMode};
use super::rates::{self, RateMode};
use super::results::ProjectionResult;
use super::trajectory::Trajectory;

/// Explicit mode selection for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// How the quoted return rate becomes a periodic rate
    #[serde(default)]
    pub rate_mode: RateMode,

    /// How the real-terms trajectory is derived
    #[serde(default)]
    pub inflation_mode: InflationMode,
}

impl ProjectionConfig {
    pub fn new(rate_mode: RateMode, inflation_mode: InflationMode) -> Self {
        Self { rate_mode, inflation_mode }
    }
}

/// Main projection engine
///
/// Stateless apart from its configuration; every call receives parameters by
/// reference and returns fresh trajectories, so one engine can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Per-period growth rate for `params` under the configured rate mode
    pub fn periodic_rate(&self, params: &SimulationParameters) -> f64 {
        rates::periodic_rate(
            params.return_rate,
            params.fee_rate,
            params.periods_per_year,
            self.config.rate_mode,
        )
    }

    /// Run projection for one parameter set
    ///
    /// Parameters are assumed validated. Overflow is not guarded: `inf`/`NaN`
    /// entries are returned as computed.
    pub fn project(&self, params: &SimulationParameters) -> ProjectionResult {
        let periodic_rate = self.periodic_rate(params);
        debug!(
            "projecting {} periods ({:?}, {:?}): periodic rate {:.8}",
            params.periods, self.config.rate_mode, self.config.inflation_mode, periodic_rate
        );

        let nominal = growth::simulate(
            params.starting_capital,
            periodic_rate,
            params.contribution,
            params.periods,
        );

        let real = inflation::real_trajectory(
            self.config.inflation_mode,
            &nominal,
            params.starting_capital,
            periodic_rate,
            params.contribution,
            params.periods_per_year,
            params.inflation_rate,
        );

        let goal = match params.goal_target() {
            Some(target) => track_goal(&nominal, target),
            None => GoalOutcome::NotApplicable,
        };

        if nominal.has_non_finite() || real.as_ref().is_some_and(Trajectory::has_non_finite) {
            warn!(
                "projection overflowed: rate {} over {} periods produced non-finite capital",
                params.return_rate, params.periods
            );
        }

        ProjectionResult {
            nominal,
            real,
            goal,
            periodic_rate,
            periods_per_year: params.periods_per_year,
            contribution: params.contribution,
        }
    }
}

/// Convenience wrapper: `ProjectionEngine::new(config).project(params)`
pub fn project(params: &SimulationParameters, config: ProjectionConfig) -> ProjectionResult {
    ProjectionEngine::new(config).project(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn periodic_off() -> ProjectionConfig {
        ProjectionConfig::new(RateMode::Periodic, InflationMode::Off)
    }

    #[test]
    fn test_annual_rate_reproduced_after_one_year() {
        let params = SimulationParameters::new(1000.0, 0.10, 12);
        let engine = ProjectionEngine::new(ProjectionConfig::new(RateMode::Annualized, InflationMode::Off));
        let result = engine.project(&params);

        assert_relative_eq!(result.periodic_rate, 0.0079741404, epsilon = 1e-9);
        assert_abs_diff_eq!(result.nominal[12], 1100.0, epsilon = 1e-9);
        assert!(result.real.is_none());
        assert_eq!(result.goal, GoalOutcome::NotApplicable);
    }

    #[test]
    fn test_fee_drag_lowers_final_capital() {
        let engine = ProjectionEngine::default();
        let gross = engine.project(&SimulationParameters::new(1000.0, 0.06, 120));
        let net = engine.project(&SimulationParameters::new(1000.0, 0.06, 120).with_fee_rate(0.01));
        assert!(net.nominal.final_value() < gross.nominal.final_value());
        assert_abs_diff_eq!(net.nominal[120], 1000.0 * 1.05_f64.powi(10), epsilon = 1e-6);
    }

    #[test]
    fn test_goal_tracked_on_nominal() {
        let params = SimulationParameters::new(0.0, 0.0, 3)
            .with_contribution(100.0)
            .with_target_capital(300.0);
        let result = ProjectionEngine::new(periodic_off()).project(&params);
        assert_eq!(result.nominal.values(), &[0.0, 100.0, 200.0, 300.0]);
        assert_eq!(result.goal, GoalOutcome::Reached { period: 3 });
    }

    #[test]
    fn test_goal_uses_nominal_even_with_inflation() {
        let params = SimulationParameters::new(0.0, 0.0, 3)
            .with_contribution(100.0)
            .with_inflation_rate(0.5)
            .with_target_capital(300.0);
        let config = ProjectionConfig::new(RateMode::Periodic, InflationMode::Deflate);
        let result = project(&params, config);
        assert_eq!(result.goal, GoalOutcome::Reached { period: 3 });
        assert!(result.real.unwrap()[3] < 300.0);
    }

    #[test]
    fn test_post_hoc_inflation() {
        let params = SimulationParameters::new(100.0, 0.01, 3).with_inflation_rate(0.1268);
        let config = ProjectionConfig::new(RateMode::Periodic, InflationMode::Deflate);
        let result = project(&params, config);

        assert_abs_diff_eq!(result.nominal[3], 103.0301, epsilon = 1e-9);
        let real = result.real.as_ref().unwrap();
        assert_eq!(real[0], 100.0);
        assert!(real[3] < 103.0301);
        assert_abs_diff_eq!(real[3], 103.0301 / 1.1268_f64.powf(0.25), epsilon = 1e-9);
    }

    #[test]
    fn test_folded_inflation_keeps_nominal_unchanged() {
        let params = SimulationParameters::new(1000.0, 0.06, 60)
            .with_contribution(50.0)
            .with_inflation_rate(0.02);
        let folded = project(&params, ProjectionConfig::new(RateMode::Annualized, InflationMode::FoldIntoRate));
        let deflated = project(&params, ProjectionConfig::new(RateMode::Annualized, InflationMode::Deflate));

        assert_eq!(folded.nominal, deflated.nominal);
        let folded_real = folded.real.unwrap();
        let deflated_real = deflated.real.unwrap();
        assert!(folded_real.final_value() < folded.nominal.final_value());
        assert!((folded_real.final_value() - deflated_real.final_value()).abs() > 1e-6);
    }

    #[test]
    fn test_rows_and_tail() {
        let params = SimulationParameters::new(100.0, 0.01, 3).with_inflation_rate(0.02);
        let result = project(&params, ProjectionConfig::new(RateMode::Periodic, InflationMode::Deflate));

        let rows = result.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].period, 0);
        assert_eq!(rows[0].real, Some(100.0));

        let tail = result.tail(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].period, 2);
        assert_eq!(tail[1].period, 3);
        assert_eq!(result.tail(50).len(), 4);
    }

    #[test]
    fn test_summary() {
        let params = SimulationParameters::new(1000.0, 0.0, 10).with_contribution(100.0);
        let result = project(&params, periodic_off());
        let summary = result.summary();

        assert_eq!(summary.periods, 10);
        assert_abs_diff_eq!(summary.final_nominal, 2000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.total_contributions, 2000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.total_growth, 0.0, epsilon = 1e-9);
        assert_eq!(summary.final_real, None);
    }

    #[test]
    fn test_decline_scenario_negative_growth() {
        let params = SimulationParameters::new(10_000.0, -0.2, 24);
        let result = ProjectionEngine::default().project(&params);
        assert!(result.periodic_rate < 0.0);
        assert!(result.summary().total_growth < 0.0);
        assert_abs_diff_eq!(result.nominal[24], 10_000.0 * 0.8_f64.powi(2), epsilon = 1e-6);
    }

    #[test]
    fn test_zero_periods() {
        let params = SimulationParameters::new(777.0, 0.05, 0).with_target_capital(1.0);
        let result = ProjectionEngine::default().project(&params);
        assert_eq!(result.nominal.values(), &[777.0]);
        assert_eq!(result.real.unwrap().values(), &[777.0]);
        assert_eq!(result.goal, GoalOutcome::NotReached);
    }
}
