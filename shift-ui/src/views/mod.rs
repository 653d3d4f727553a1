//! Wizard step navigation.
//!
//! - `view_controller` - Calendar / time-entry state machine with the settle window
//! - `progress` - Three-step progress indicator derived from the current step

mod progress;
mod view_controller;

pub use progress::{ProgressIndicator, StepState};
pub use view_controller::{
    DEFAULT_SETTLE_WINDOW, TransitionOutcome, TransitionRefusal, View, ViewController,
};
