//! Projection engine for single-scenario capital projections

mod trajectory;
mod results;
pub mod rates;
pub mod growth;
pub mod inflation;
pub mod goal;
mod engine;

pub use trajectory::Trajectory;
pub use results::{ProjectionResult, ProjectionRow, ProjectionSummary};
pub use rates::RateMode;
pub use growth::GrowthPath;
pub use inflation::InflationMode;
pub use goal::GoalOutcome;
pub use engine::{project, ProjectionConfig, ProjectionEngine};
