//! Input validation applied before parameters reach the projection core

use super::SimulationParameters;
use crate::projection::RateMode;

/// A parameter rejected at the input boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("starting capital must be non-negative, got {0}")]
    NegativeStartingCapital(f64),

    #[error("periodic contribution must be non-negative, got {0}")]
    NegativeContribution(f64),

    #[error("periods per year must be positive")]
    ZeroPeriodsPerYear,

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("effective annual return {effective} is at or below -100%")]
    TotalLoss { effective: f64 },

    #[error("annual inflation {inflation} is at or below -100%")]
    InflationTotalLoss { inflation: f64 },

    #[error("horizon missing: give either periods or years")]
    MissingHorizon,
}

impl SimulationParameters {
    /// Check the parameter set for the given rate mode
    ///
    /// Returns the first violation found. Extreme but finite rates pass:
    /// overflow in the projection is surfaced as `inf`/`NaN`, not rejected.
    pub fn validate(&self, rate_mode: RateMode) -> Result<(), ParameterError> {
        let finite_fields = [
            ("starting_capital", self.starting_capital),
            ("contribution", self.contribution),
            ("return_rate", self.return_rate),
            ("fee_rate", self.fee_rate),
            ("inflation_rate", self.inflation_rate),
            ("target_capital", self.target_capital.unwrap_or(0.0)),
        ];
        for (field, value) in finite_fields {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { field, value });
            }
        }

        if self.starting_capital < 0.0 {
            return Err(ParameterError::NegativeStartingCapital(self.starting_capital));
        }
        if self.contribution < 0.0 {
            return Err(ParameterError::NegativeContribution(self.contribution));
        }
        if self.periods_per_year == 0 {
            return Err(ParameterError::ZeroPeriodsPerYear);
        }

        // Deflator (1 + g)^(t/p) is zero or has no real value
        if self.inflation_rate <= -1.0 {
            return Err(ParameterError::InflationTotalLoss {
                inflation: self.inflation_rate,
            });
        }

        // (1 + r_eff)^(1/p) has no real root below -100%
        if rate_mode == RateMode::Annualized && self.effective_return() <= -1.0 {
            return Err(ParameterError::TotalLoss {
                effective: self.effective_return(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SimulationParameters {
        SimulationParameters::new(1000.0, 0.05, 12)
    }

    #[test]
    fn test_valid_parameters() {
        assert!(base().validate(RateMode::Annualized).is_ok());
        assert!(base().with_return_rate(-0.3).validate(RateMode::Annualized).is_ok());
    }

    #[test]
    fn test_negative_starting_capital() {
        let mut params = base();
        params.starting_capital = -1.0;
        assert_eq!(
            params.validate(RateMode::Annualized),
            Err(ParameterError::NegativeStartingCapital(-1.0))
        );
    }

    #[test]
    fn test_negative_contribution() {
        let params = base().with_contribution(-50.0);
        assert_eq!(
            params.validate(RateMode::Periodic),
            Err(ParameterError::NegativeContribution(-50.0))
        );
    }

    #[test]
    fn test_zero_periods_per_year() {
        let params = base().with_periods_per_year(0);
        assert_eq!(
            params.validate(RateMode::Annualized),
            Err(ParameterError::ZeroPeriodsPerYear)
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = base().with_inflation_rate(f64::NAN);
        assert!(matches!(
            params.validate(RateMode::Annualized),
            Err(ParameterError::NonFinite { field: "inflation_rate", .. })
        ));
    }

    #[test]
    fn test_inflation_at_or_below_total_loss() {
        let params = base().with_inflation_rate(-1.0);
        assert_eq!(
            params.validate(RateMode::Periodic),
            Err(ParameterError::InflationTotalLoss { inflation: -1.0 })
        );
        assert!(base().with_inflation_rate(-0.05).validate(RateMode::Annualized).is_ok());
    }

    #[test]
    fn test_total_loss_only_in_annualized_mode() {
        let params = base().with_return_rate(-0.5).with_fee_rate(0.6);
        assert!(matches!(
            params.validate(RateMode::Annualized),
            Err(ParameterError::TotalLoss { .. })
        ));
        assert!(params.validate(RateMode::Periodic).is_ok());
    }
}
