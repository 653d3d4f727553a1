pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{AggregateSummary, DurationCalculator, validate_cards};
pub use error::{ModelError, ValidationError};
pub use models::*;
