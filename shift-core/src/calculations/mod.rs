//! Worked-time calculations over time cards.
//!
//! This module provides per-card shift durations with overnight wraparound,
//! the aggregate summary shown on confirmation, and the completeness check
//! that gates confirmation.

pub mod common;
pub mod duration;
pub mod summary;
pub mod validation;

pub use duration::DurationCalculator;
pub use summary::AggregateSummary;
pub use validation::validate_cards;
