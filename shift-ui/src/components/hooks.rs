//! Optional collaborator capabilities.
//!
//! Page-level helpers such as the hours counter or the time picker may or
//! may not be present. Rather than probing for them on every call, the
//! wizard is composed with one [`WizardHooks`] implementation whose methods
//! all default to doing nothing.

use async_trait::async_trait;
use shift_core::AggregateSummary;
use tracing::warn;

use crate::models::RenderedCard;

/// Best-effort notifications to surrounding UI code.
pub trait WizardHooks: Send + Sync {
    /// Called after any change to the card model.
    fn update_total_hours(
        &self,
        _summary: &AggregateSummary,
    ) {
    }

    /// Called once per visible card each time the list is rendered.
    fn update_card_hours(
        &self,
        _card: &RenderedCard,
    ) {
    }

    /// Called when a card is clicked.
    fn open_card_time_picker(
        &self,
        _index: usize,
    ) {
    }

    /// Called when the time picker should close, e.g. after a removal.
    fn close_time_picker(&self) {}
}

/// Hooks that ignore every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl WizardHooks for NoopHooks {}

/// Shows a message to the user and resolves once it is dismissed.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn show_alert(
        &self,
        message: &str,
    );
}

/// Fallback alert for environments without a custom dialog: logs the
/// message and writes it to stderr, returning immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingAlert;

#[async_trait]
impl AlertSink for BlockingAlert {
    async fn show_alert(
        &self,
        message: &str,
    ) {
        warn!(%message, "alert");
        eprintln!("{message}");
    }
}
