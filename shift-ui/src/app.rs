//! The shift-submission wizard.
//!
//! [`ShiftWizard`] owns one session's context and wires user actions to the
//! card model, the renderer, the step controller and the submission gate.
//! Every handler runs to completion before the next one starts; while a
//! blocking dialog is open the card model cannot be changed.

use std::sync::Arc;
use std::time::Duration;

use shift_core::{
    AggregateSummary, BulkDefaults, DateSelection, DurationCalculator, ModelError, TimeCard,
    TimeField, ValidationError,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::components::{
    ActionBindings, AlertSink, BlockingAlert, ConfirmationView, NoopHooks, RenderSync,
    SUBMITTED_MESSAGE, SubmissionGate, SubmitReceipt, WizardAction, WizardHooks,
};
use crate::config::{ConfigError, WizardConfig};
use crate::models::{RenderedConfirmation, RenderedList};
use crate::state::{DialogState, ModalDescriptor, WizardContext};
use crate::views::{ProgressIndicator, TransitionOutcome, View, ViewController};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A blocking dialog is open; the shift cannot change underneath it.
    #[error("a dialog is open")]
    ModalOpen,

    /// Cards can only be edited or submitted from the time-entry step.
    #[error("not on the time-entry step")]
    NotOnTimeEntry,

    #[error("the confirmation dialog is not open")]
    NotConfirming,

    #[error("no action is bound to '{0}'")]
    Unbound(String),
}

/// What a button click ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Transition(TransitionOutcome),
    Confirmation(ConfirmationView),
    Cancelled,
    Submitted(SubmitReceipt),
}

pub struct ShiftWizard {
    ctx: WizardContext,
    views: ViewController,
    render: RenderSync,
    gate: SubmissionGate,
    bindings: ActionBindings,
    hooks: Box<dyn WizardHooks>,
    alerts: Box<dyn AlertSink>,
    confirmation: Option<ConfirmationView>,
}

impl ShiftWizard {
    /// A wizard with no-op hooks and the fallback alert.
    pub fn new(
        bulk_defaults: BulkDefaults,
        settle_window: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            ctx: WizardContext::new(bulk_defaults),
            views: ViewController::new(settle_window, clock),
            render: RenderSync::new(),
            gate: SubmissionGate,
            bindings: ActionBindings::with_defaults(),
            hooks: Box::new(NoopHooks),
            alerts: Box::new(BlockingAlert),
            confirmation: None,
        }
    }

    pub fn from_config(config: &WizardConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.bulk_defaults()?,
            config.settle_window(),
            Arc::new(SystemClock),
        ))
    }

    pub fn with_hooks(
        mut self,
        hooks: impl WizardHooks + 'static,
    ) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn with_alerts(
        mut self,
        alerts: impl AlertSink + 'static,
    ) -> Self {
        self.alerts = Box::new(alerts);
        self
    }

    // ─── accessors ───────────────────────────────────────────────────────

    pub fn view(&self) -> View {
        self.views.view()
    }

    pub fn progress(&self) -> ProgressIndicator {
        self.views.progress()
    }

    pub fn is_settling(&self) -> bool {
        self.views.is_settling()
    }

    pub fn cards(&self) -> &[TimeCard] {
        self.ctx.model.cards()
    }

    pub fn summary(&self) -> AggregateSummary {
        DurationCalculator::summarize(self.ctx.model.cards())
    }

    pub fn rendered(&self) -> &RenderedList {
        self.render.list()
    }

    pub fn rendered_confirmation(&self) -> &RenderedConfirmation {
        self.render.confirmation()
    }

    pub fn context(&self) -> &WizardContext {
        &self.ctx
    }

    /// Bulk defaults used by the next card generation.
    pub fn set_bulk_defaults(
        &mut self,
        bulk_defaults: BulkDefaults,
    ) {
        self.ctx.bulk_defaults = bulk_defaults;
    }

    // ─── navigation ──────────────────────────────────────────────────────

    pub fn next_to_time(
        &mut self,
        selection: &DateSelection,
    ) -> Result<TransitionOutcome, WizardError> {
        self.ensure_unblocked()?;
        Ok(self.views.show_time_view(
            selection,
            &mut self.ctx,
            &mut self.render,
            self.hooks.as_ref(),
        ))
    }

    pub fn back_to_calendar(&mut self) -> Result<TransitionOutcome, WizardError> {
        self.ensure_unblocked()?;
        Ok(self.views.show_calendar_view())
    }

    // ─── card edits ──────────────────────────────────────────────────────

    /// Opens the time picker on a card.
    pub fn open_card_time_picker(
        &mut self,
        index: usize,
    ) -> Result<(), WizardError> {
        self.ensure_time_entry()?;
        if self.ctx.model.get(index).is_none() {
            return Err(ModelError::UnknownCard { index }.into());
        }
        self.ctx.current_modal = Some(ModalDescriptor::card(index));
        self.hooks.open_card_time_picker(index);
        Ok(())
    }

    pub fn close_time_picker(&mut self) {
        if self.ctx.current_modal.take().is_some() {
            self.hooks.close_time_picker();
        }
    }

    /// Sets one end of a card's shift from a picker `HH:MM` value.
    pub fn set_card_time(
        &mut self,
        index: usize,
        field: TimeField,
        value: &str,
    ) -> Result<(), WizardError> {
        self.ensure_time_entry()?;
        self.ctx.model.update_time_str(index, field, value)?;
        self.after_model_change();
        Ok(())
    }

    /// Removes the card whose time picker is open, without confirmation,
    /// then closes the picker. Does nothing if no card picker is open.
    pub fn remove_current_card(&mut self) -> Result<bool, WizardError> {
        self.ensure_time_entry()?;
        let Some(index) = self.ctx.modal_card() else {
            return Ok(false);
        };
        let removed = self.ctx.model.mark_removed(index)?;
        self.after_model_change();
        self.close_time_picker();
        Ok(removed)
    }

    // ─── submission ──────────────────────────────────────────────────────

    /// Opens the confirmation dialog if every remaining card is complete.
    /// Otherwise alerts the user and returns the validation error.
    pub async fn submit(&mut self) -> Result<ConfirmationView, WizardError> {
        self.ensure_time_entry()?;
        let view = self
            .gate
            .request_confirmation(
                self.ctx.model.cards(),
                &mut self.ctx.dialog,
                self.alerts.as_ref(),
            )
            .await?;
        self.render.show_confirmation(&view);
        self.confirmation = Some(view.clone());
        Ok(view)
    }

    pub fn cancel_submit(&mut self) -> Result<(), WizardError> {
        if self.ctx.dialog != DialogState::Confirmation {
            return Err(WizardError::NotConfirming);
        }
        self.close_confirmation();
        debug!("confirmation cancelled");
        Ok(())
    }

    /// Final submission stub. Acknowledges the confirmed shift to the user
    /// and closes the confirmation dialog. Nothing leaves the process.
    pub async fn final_submit(&mut self) -> Result<SubmitReceipt, WizardError> {
        let view = match (&self.confirmation, self.ctx.dialog) {
            (Some(view), DialogState::Confirmation) => view.clone(),
            _ => return Err(WizardError::NotConfirming),
        };
        let receipt = self.gate.submit(&view);

        self.ctx.dialog = DialogState::Alert;
        self.alerts.show_alert(SUBMITTED_MESSAGE).await;
        self.close_confirmation();
        info!(days = receipt.summary.total_days, "submission acknowledged");
        Ok(receipt)
    }

    // ─── buttons ─────────────────────────────────────────────────────────

    /// Dispatches a click on a bound button element.
    pub async fn click(
        &mut self,
        element: &str,
        selection: &DateSelection,
    ) -> Result<ClickOutcome, WizardError> {
        let action = self
            .bindings
            .resolve(element)
            .ok_or_else(|| WizardError::Unbound(element.to_string()))?;
        debug!(element, ?action, "click");
        match action {
            WizardAction::NextToTime => self.next_to_time(selection).map(ClickOutcome::Transition),
            WizardAction::BackToCalendar => self.back_to_calendar().map(ClickOutcome::Transition),
            WizardAction::Submit => self.submit().await.map(ClickOutcome::Confirmation),
            WizardAction::FinalSubmit => self.final_submit().await.map(ClickOutcome::Submitted),
            WizardAction::CancelSubmit => self.cancel_submit().map(|()| ClickOutcome::Cancelled),
        }
    }

    fn ensure_unblocked(&self) -> Result<(), WizardError> {
        if self.ctx.is_blocked() {
            Err(WizardError::ModalOpen)
        } else {
            Ok(())
        }
    }

    fn ensure_time_entry(&self) -> Result<(), WizardError> {
        self.ensure_unblocked()?;
        if self.views.view() == View::TimeEntry {
            Ok(())
        } else {
            Err(WizardError::NotOnTimeEntry)
        }
    }

    fn after_model_change(&mut self) {
        self.render.render_all(self.ctx.model.cards(), self.hooks.as_ref());
        self.hooks
            .update_total_hours(&DurationCalculator::summarize(self.ctx.model.cards()));
    }

    fn close_confirmation(&mut self) {
        self.ctx.dialog = DialogState::None;
        self.confirmation = None;
        self.render.hide_confirmation();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use shift_core::ShiftTime;

    use super::*;
    use crate::clock::ManualClock;
    use crate::components::INCOMPLETE_CARD_MESSAGE;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }

        fn push(
            &self,
            event: String,
        ) {
            self.0.lock().unwrap().push(event);
        }
    }

    impl WizardHooks for Recorder {
        fn update_total_hours(
            &self,
            summary: &AggregateSummary,
        ) {
            self.push(format!("hours:{}", summary.total_minutes));
        }

        fn open_card_time_picker(
            &self,
            index: usize,
        ) {
            self.push(format!("open:{index}"));
        }

        fn close_time_picker(&self) {
            self.push("close".to_string());
        }
    }

    #[async_trait]
    impl AlertSink for Recorder {
        async fn show_alert(
            &self,
            message: &str,
        ) {
            self.push(format!("alert:{message}"));
        }
    }

    fn wizard(recorder: &Recorder) -> (ShiftWizard, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let wizard = ShiftWizard::new(
            BulkDefaults::new(ShiftTime::from_hm(9, 0), ShiftTime::from_hm(17, 0)),
            Duration::from_millis(400),
            clock.clone(),
        )
        .with_hooks(recorder.clone())
        .with_alerts(recorder.clone());
        (wizard, clock)
    }

    fn selection() -> DateSelection {
        DateSelection::from_iso_dates(["2024-06-15", "2024-06-16", "2024-06-17"]).unwrap()
    }

    #[test]
    fn remove_current_card_uses_open_picker() {
        let recorder = Recorder::default();
        let (mut wizard, _) = wizard(&recorder);
        wizard.next_to_time(&selection()).unwrap();

        wizard.open_card_time_picker(1).unwrap();
        let removed = wizard.remove_current_card().unwrap();

        assert!(removed);
        assert!(wizard.cards()[1].removed);
        assert_eq!(wizard.rendered().total_work_days, 2);
        assert_eq!(wizard.context().current_modal, None);
        assert_eq!(
            recorder.events(),
            vec!["hours:1440", "open:1", "hours:960", "close"]
        );
    }

    #[test]
    fn remove_current_card_without_picker_does_nothing() {
        let recorder = Recorder::default();
        let (mut wizard, _) = wizard(&recorder);
        wizard.next_to_time(&selection()).unwrap();

        assert_eq!(wizard.remove_current_card(), Ok(false));
        assert_eq!(wizard.summary().total_days, 3);
    }

    #[test]
    fn open_picker_on_unknown_card_fails() {
        let recorder = Recorder::default();
        let (mut wizard, _) = wizard(&recorder);
        wizard.next_to_time(&selection()).unwrap();

        assert_eq!(
            wizard.open_card_time_picker(3),
            Err(WizardError::Model(ModelError::UnknownCard { index: 3 }))
        );
    }

    #[tokio::test]
    async fn submit_on_calendar_is_refused() {
        let recorder = Recorder::default();
        let (mut wizard, _) = wizard(&recorder);

        assert_eq!(wizard.submit().await, Err(WizardError::NotOnTimeEntry));
        assert!(!wizard.rendered_confirmation().visible);
        assert_eq!(wizard.context().dialog, DialogState::None);
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn edits_after_returning_to_calendar_are_refused() {
        let recorder = Recorder::default();
        let (mut wizard, clock) = wizard(&recorder);
        wizard.next_to_time(&selection()).unwrap();
        clock.advance(Duration::from_millis(400));
        wizard.back_to_calendar().unwrap();

        assert_eq!(
            wizard.set_card_time(0, TimeField::Start, "10:00"),
            Err(WizardError::NotOnTimeEntry)
        );
        assert_eq!(
            wizard.open_card_time_picker(0),
            Err(WizardError::NotOnTimeEntry)
        );
        assert_eq!(wizard.remove_current_card(), Err(WizardError::NotOnTimeEntry));
        assert_eq!(wizard.submit().await, Err(WizardError::NotOnTimeEntry));
        assert!(!wizard.cards()[0].modified);
        assert!(!wizard.rendered_confirmation().visible);
    }

    #[test]
    fn set_card_time_rerenders_and_updates_hours() {
        let recorder = Recorder::default();
        let (mut wizard, _) = wizard(&recorder);
        wizard.next_to_time(&selection()).unwrap();

        wizard.set_card_time(0, TimeField::End, "18:30").unwrap();

        assert_eq!(wizard.rendered().card(0).unwrap().hours_text, "9時間30分");
        assert_eq!(wizard.summary().total_minutes, 480 * 2 + 570);
    }

    #[tokio::test]
    async fn submit_with_incomplete_card_alerts_and_stays_editable() {
        let recorder = Recorder::default();
        let (mut wizard, _) = wizard(&recorder);
        wizard.set_bulk_defaults(BulkDefaults::new(ShiftTime::from_hm(9, 0), None));
        wizard.next_to_time(&selection()).unwrap();

        let result = wizard.submit().await;

        assert_eq!(
            result,
            Err(WizardError::Validation(ValidationError::IncompleteCard {
                index: 0,
                field: TimeField::End
            }))
        );
        assert!(
            recorder
                .events()
                .contains(&format!("alert:{INCOMPLETE_CARD_MESSAGE}"))
        );
        assert!(wizard.set_card_time(0, TimeField::End, "12:00").is_ok());
    }

    #[tokio::test]
    async fn open_confirmation_blocks_edits_until_cancelled() {
        let recorder = Recorder::default();
        let (mut wizard, _) = wizard(&recorder);
        wizard.next_to_time(&selection()).unwrap();

        wizard.submit().await.unwrap();

        assert!(wizard.rendered_confirmation().visible);
        assert_eq!(
            wizard.set_card_time(0, TimeField::Start, "10:00"),
            Err(WizardError::ModalOpen)
        );
        assert_eq!(wizard.back_to_calendar(), Err(WizardError::ModalOpen));

        wizard.cancel_submit().unwrap();

        assert!(!wizard.rendered_confirmation().visible);
        assert!(wizard.set_card_time(0, TimeField::Start, "10:00").is_ok());
    }

    #[tokio::test]
    async fn final_submit_requires_open_confirmation() {
        let recorder = Recorder::default();
        let (mut wizard, _) = wizard(&recorder);
        wizard.next_to_time(&selection()).unwrap();

        assert_eq!(
            wizard.final_submit().await,
            Err(WizardError::NotConfirming)
        );

        wizard.submit().await.unwrap();
        let receipt = wizard.final_submit().await.unwrap();

        assert_eq!(receipt.message, SUBMITTED_MESSAGE);
        assert_eq!(receipt.rows.len(), 3);
        assert_eq!(receipt.summary.formatted_hours(), "24時間");
        assert_eq!(wizard.context().dialog, DialogState::None);
    }

    #[tokio::test]
    async fn click_dispatches_bound_actions() {
        let recorder = Recorder::default();
        let (mut wizard, clock) = wizard(&recorder);

        let outcome = wizard.click("nextToTimeBtn", &selection()).await.unwrap();
        assert_eq!(
            outcome,
            ClickOutcome::Transition(TransitionOutcome::Entered(View::TimeEntry))
        );

        clock.advance(Duration::from_millis(400));
        let outcome = wizard.click("submitBtn", &selection()).await.unwrap();
        assert!(matches!(outcome, ClickOutcome::Confirmation(_)));

        let outcome = wizard.click("cancelSubmit", &selection()).await.unwrap();
        assert_eq!(outcome, ClickOutcome::Cancelled);

        assert_eq!(
            wizard.click("missingBtn", &selection()).await,
            Err(WizardError::Unbound("missingBtn".to_string()))
        );
    }
}
