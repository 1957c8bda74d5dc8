//! Conversion from quoted return rates to the per-period growth rate

use serde::{Deserialize, Serialize};

/// How the quoted return rate is interpreted
///
/// The mode is always chosen by the caller; it is never inferred from the
/// magnitude of the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateMode {
    /// Annual rate, converted geometrically: `i = (1 + r - f)^(1/p) - 1`
    #[default]
    Annualized,
    /// Rate already quoted per period; fee is subtracted directly: `i = r - f`
    Periodic,
}

/// Geometric conversion of an annual rate to an equivalent per-period rate
///
/// Compounding the result `periods_per_year` times reproduces `annual_rate`.
pub fn annual_to_periodic(annual_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + annual_rate).powf(1.0 / periods_per_year as f64) - 1.0
}

/// Annual rate produced by compounding `periodic_rate` over one year
pub fn periodic_to_annual(periodic_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + periodic_rate).powi(periods_per_year as i32) - 1.0
}

/// Per-period growth rate from a quoted return, fee drag and frequency
pub fn periodic_rate(return_rate: f64, fee_rate: f64, periods_per_year: u32, mode: RateMode) -> f64 {
    let effective = return_rate - fee_rate;
    match mode {
        RateMode::Annualized => annual_to_periodic(effective, periods_per_year),
        RateMode::Periodic => effective,
    }
}
