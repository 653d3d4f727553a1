pub mod app;
pub mod clock;
pub mod components;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod models;
pub mod state;
pub mod utils;
pub mod views;

pub use app::{ClickOutcome, ShiftWizard, WizardError};
pub use config::WizardConfig;
