//! Target capital detection

use serde::{Deserialize, Serialize};

use super::trajectory::Trajectory;

/// Result of scanning a nominal trajectory for a target balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalOutcome {
    /// Target absent or non-positive
    NotApplicable,
    /// Target never met within the horizon
    NotReached,
    /// First period (1-based) at which the balance met the target
    Reached { period: usize },
}

impl GoalOutcome {
    pub fn reached_period(&self) -> Option<usize> {
        match self {
            GoalOutcome::Reached { period } => Some(*period),
            _ => None,
        }
    }

    /// Split the reaching period into whole years and leftover periods
    pub fn elapsed(&self, periods_per_year: u32) -> Option<(usize, usize)> {
        let p = periods_per_year.max(1) as usize;
        self.reached_period().map(|k| (k / p, k % p))
    }
}

/// First index `k` in `1..=N` with `trajectory[k] >= target`
///
/// Period 0 is skipped even if the starting capital already meets the
/// target. A `NaN` entry never satisfies the comparison.
pub fn track_goal(nominal: &Trajectory, target: f64) -> GoalOutcome {
    if target.is_nan() || target <= 0.0 {
        return GoalOutcome::NotApplicable;
    }
    nominal
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, value)| value >= target)
        .map_or(GoalOutcome::NotReached, |(period, _)| GoalOutcome::Reached { period })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::growth::simulate;

    #[test]
    fn test_reached_exactly_on_target() {
        let t = simulate(0.0, 0.0, 100.0, 3);
        assert_eq!(track_goal(&t, 300.0), GoalOutcome::Reached { period: 3 });
    }

    #[test]
    fn test_first_crossing_wins() {
        let t = simulate(0.0, 0.0, 100.0, 10);
        assert_eq!(track_goal(&t, 250.0), GoalOutcome::Reached { period: 3 });
    }

    #[test]
    fn test_not_reached() {
        let t = simulate(0.0, 0.0, 100.0, 3);
        assert_eq!(track_goal(&t, 301.0), GoalOutcome::NotReached);
    }

    #[test]
    fn test_disabled_for_non_positive_target() {
        let t = simulate(100.0, 0.01, 0.0, 3);
        assert_eq!(track_goal(&t, 0.0), GoalOutcome::NotApplicable);
        assert_eq!(track_goal(&t, -10.0), GoalOutcome::NotApplicable);
        assert_eq!(track_goal(&t, f64::NAN), GoalOutcome::NotApplicable);
    }

    #[test]
    fn test_period_zero_never_counts() {
        // Starting capital already above target
        let t = simulate(5000.0, 0.0, 0.0, 2);
        assert_eq!(track_goal(&t, 1000.0), GoalOutcome::Reached { period: 1 });

        let t = simulate(5000.0, 0.0, 0.0, 0);
        assert_eq!(track_goal(&t, 1000.0), GoalOutcome::NotReached);
    }

    #[test]
    fn test_declining_path_from_above_target() {
        let t = simulate(1000.0, -0.5, 0.0, 3);
        assert_eq!(track_goal(&t, 900.0), GoalOutcome::NotReached);
    }

    #[test]
    fn test_elapsed_years_and_periods() {
        let outcome = GoalOutcome::Reached { period: 27 };
        assert_eq!(outcome.elapsed(12), Some((2, 3)));
        assert_eq!(GoalOutcome::NotReached.elapsed(12), None);
    }
}
