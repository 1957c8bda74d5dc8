//! Real-terms (inflation-adjusted) trajectories
//!
//! Two non-equivalent adjustments are supported and must be selected
//! explicitly:
//! - `Deflate`: divide the nominal path by `(1 + g)^(t / p)`, i.e. deflation
//!   compounds on elapsed years independently of the return frequency
//! - `FoldIntoRate`: subtract the periodic inflation rate `g_p` from the growth
//!   rate and re-simulate, with the contribution of period `t` counted as
//!   `a / (1 + g_p)^t`

use serde::{Deserialize, Serialize};

use super::growth::GrowthPath;
use super::rates::annual_to_periodic;
use super::trajectory::Trajectory;

/// How (and whether) a real-terms trajectory is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InflationMode {
    /// No real-terms trajectory
    Off,
    /// Post hoc deflation of the nominal trajectory by elapsed years
    #[default]
    Deflate,
    /// Periodic inflation subtracted from the growth rate before simulation,
    /// contributions deflated to period-0 money
    FoldIntoRate,
}

/// Post hoc deflation: `real[t] = nominal[t] / (1 + g)^(t / p)`
pub fn deflate(nominal: &Trajectory, periods_per_year: u32, inflation_rate: f64) -> Trajectory {
    let p = periods_per_year as f64;
    let base = 1.0 + inflation_rate;
    let values = nominal
        .iter()
        .enumerate()
        .map(|(t, value)| {
            if t == 0 {
                value
            } else {
                value / base.powf(t as f64 / p)
            }
        })
        .collect();
    Trajectory::from_values(values)
}

/// Periodic rate with inflation folded in: `i - ((1 + g)^(1/p) - 1)`
pub fn fold_into_rate(periodic_rate: f64, inflation_rate: f64, periods_per_year: u32) -> f64 {
    periodic_rate - annual_to_periodic(inflation_rate, periods_per_year)
}

/// Real trajectory under `mode`, or `None` when inflation handling is off
pub fn real_trajectory(
    mode: InflationMode,
    nominal: &Trajectory,
    starting_capital: f64,
    periodic_rate: f64,
    contribution: f64,
    periods_per_year: u32,
    inflation_rate: f64,
) -> Option<Trajectory> {
    match mode {
        InflationMode::Off => None,
        InflationMode::Deflate => Some(deflate(nominal, periods_per_year, inflation_rate)),
        InflationMode::FoldIntoRate => {
            let real_rate = fold_into_rate(periodic_rate, inflation_rate, periods_per_year);
            let path = GrowthPath::new(starting_capital, real_rate, contribution, nominal.periods() as u32)
                .with_contribution_deflator(annual_to_periodic(inflation_rate, periods_per_year));
            Some(Trajectory::from_values(path.collect()))
        }
    }
}
