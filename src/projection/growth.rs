//! Period-by-period compounding of capital with fixed contributions

use super::trajectory::Trajectory;

/// Lazy capital path: yields `c[0] = c0`, then `c[t] = c[t-1] * (1 + i) + a[t]`
///
/// `a[t]` is the fixed contribution, or `a / (1 + d)^t` once a deflator `d`
/// is set. Useful when the horizon is too long to materialize; [`simulate`]
/// collects the undeflated sequence into a [`Trajectory`].
#[derive(Debug, Clone)]
pub struct GrowthPath {
    balance: f64,
    periodic_rate: f64,
    contribution: f64,
    /// Per-period factor applied to the contribution before it is added
    contribution_discount: f64,
    /// Entries still to yield, including the pending `balance`
    remaining: usize,
    started: bool,
}

impl GrowthPath {
    pub fn new(starting_capital: f64, periodic_rate: f64, contribution: f64, periods: u32) -> Self {
        Self {
            balance: starting_capital,
            periodic_rate,
            contribution,
            contribution_discount: 1.0,
            remaining: periods as usize + 1,
            started: false,
        }
    }

    /// Express contributions in period-0 money: period `t` adds `a / (1 + d)^t`
    pub fn with_contribution_deflator(mut self, periodic_deflator: f64) -> Self {
        self.contribution_discount = 1.0 / (1.0 + periodic_deflator);
        self
    }
}

impl Iterator for GrowthPath {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        if self.started {
            self.contribution *= self.contribution_discount;
            self.balance = self.balance * (1.0 + self.periodic_rate) + self.contribution;
        } else {
            self.started = true;
        }
        self.remaining -= 1;
        Some(self.balance)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GrowthPath {}

/// Nominal trajectory of length `periods + 1`
///
/// No rounding between periods; a negative `periodic_rate` is applied as is.
pub fn simulate(starting_capital: f64, periodic_rate: f64, contribution: f64, periods: u32) -> Trajectory {
    let path = GrowthPath::new(starting_capital, periodic_rate, contribution, periods);
    let mut values = Vec::with_capacity(path.len());
    values.extend(path);
    Trajectory::from_values(values)
}
