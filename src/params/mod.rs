//! Simulation parameters, input validation and request loading

mod data;
mod validation;
pub mod request;

pub use data::{SimulationParameters, DEFAULT_PERIODS_PER_YEAR};
pub use validation::ParameterError;
pub use request::ProjectionRequest;
