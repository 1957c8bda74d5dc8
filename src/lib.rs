//! Capital Projection - compound growth engine for savings plans
//!
//! This library provides:
//! - Annual-to-periodic rate conversion with fee drag
//! - Nominal capital trajectories with fixed periodic contributions
//! - Inflation-adjusted (real) trajectories, post hoc or folded into the rate
//! - Target capital detection
//! - Multi-rate scenario comparison
//! - CSV / JSON export of projection rows

pub mod error;
pub mod params;
pub mod projection;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use params::{ParameterError, ProjectionRequest, SimulationParameters};
pub use projection::{
    GoalOutcome, InflationMode, ProjectionConfig, ProjectionEngine, ProjectionResult, RateMode,
    Trajectory,
};
pub use scenario::{Scenario, ScenarioRunner, ScenarioSet};
