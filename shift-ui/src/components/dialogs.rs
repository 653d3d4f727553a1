//! Submission gate and confirmation dialog content.
//!
//! The gate only decides whether the confirmation dialog may be shown.
//! Confirming or cancelling is left to the user; final submission is a
//! stub that acknowledges the shift without sending it anywhere.

use serde::Serialize;
use shift_core::{
    AggregateSummary, DurationCalculator, ShiftTime, TimeCard, ValidationError, validate_cards,
};
use tracing::{info, warn};

use super::hooks::AlertSink;
use crate::state::DialogState;

/// Shown when a card is missing a start or end time.
pub const INCOMPLETE_CARD_MESSAGE: &str = "全ての日付に時間を設定してください";

/// Acknowledgment returned by the submission stub.
pub const SUBMITTED_MESSAGE: &str = "シフトを提出しました！（実装中）";

/// One card's line in the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmRow {
    pub index: usize,
    pub display_date: String,
    pub start_time: ShiftTime,
    pub end_time: ShiftTime,
}

/// Everything the confirmation dialog shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationView {
    pub summary: AggregateSummary,
    /// Non-removed cards in generation order.
    pub rows: Vec<ConfirmRow>,
}

/// What the submission stub hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    pub message: &'static str,
    pub rows: Vec<ConfirmRow>,
    pub summary: AggregateSummary,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionGate;

impl SubmissionGate {
    /// Checks every non-removed card is complete and builds the dialog
    /// contents from them.
    ///
    /// # Errors
    ///
    /// [`ValidationError::IncompleteCard`] for the first card, in
    /// generation order, that is missing a time.
    pub fn validate(
        &self,
        cards: &[TimeCard],
    ) -> Result<ConfirmationView, ValidationError> {
        validate_cards(cards)?;

        let rows = cards
            .iter()
            .filter(|card| card.is_active())
            .filter_map(|card| match (card.start_time, card.end_time) {
                (Some(start_time), Some(end_time)) => Some(ConfirmRow {
                    index: card.index,
                    display_date: card.display_date.clone(),
                    start_time,
                    end_time,
                }),
                _ => None,
            })
            .collect();

        Ok(ConfirmationView {
            summary: DurationCalculator::summarize(cards),
            rows,
        })
    }

    /// Validates and, on failure, shows the incomplete-card alert and waits
    /// for it to be dismissed before returning the error.
    ///
    /// `dialog` tracks the single blocking dialog: it reads
    /// [`DialogState::Alert`] while the alert is open and
    /// [`DialogState::Confirmation`] once confirmation may be shown.
    pub async fn request_confirmation(
        &self,
        cards: &[TimeCard],
        dialog: &mut DialogState,
        alerts: &dyn AlertSink,
    ) -> Result<ConfirmationView, ValidationError> {
        match self.validate(cards) {
            Ok(view) => {
                *dialog = DialogState::Confirmation;
                info!(
                    days = view.summary.total_days,
                    minutes = view.summary.total_minutes,
                    "showing confirmation"
                );
                Ok(view)
            }
            Err(error) => {
                warn!(%error, "confirmation blocked");
                *dialog = DialogState::Alert;
                alerts.show_alert(INCOMPLETE_CARD_MESSAGE).await;
                *dialog = DialogState::None;
                Err(error)
            }
        }
    }

    /// Submission stub: acknowledges the confirmed rows. Nothing is sent.
    pub fn submit(
        &self,
        view: &ConfirmationView,
    ) -> SubmitReceipt {
        info!(rows = view.rows.len(), "shift submitted (stub)");
        SubmitReceipt {
            message: SUBMITTED_MESSAGE,
            rows: view.rows.clone(),
            summary: view.summary,
        }
    }
}
