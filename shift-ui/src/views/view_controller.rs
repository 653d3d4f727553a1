//! Calendar / time-entry step coordinator.
//!
//! Moving forward regenerates the time cards from the current date
//! selection, re-renders the list and updates the progress indicator.
//! After any transition a settle window runs while the view-swap animation
//! plays; transitions requested inside it are dropped, not queued.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use shift_core::{DateSelection, DurationCalculator};
use tracing::{debug, warn};

use super::progress::ProgressIndicator;
use crate::clock::Clock;
use crate::components::{RenderSync, WizardHooks};
use crate::state::WizardContext;

/// Default settle window matching the view-swap animation.
pub const DEFAULT_SETTLE_WINDOW: Duration = Duration::from_millis(400);

/// Wizard step currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum View {
    #[default]
    Calendar,
    TimeEntry,
}

/// Why a transition did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransitionRefusal {
    /// No dates are selected, so there is nothing to enter times for.
    EmptySelection,
    /// The time-entry step can only be entered from the calendar.
    NotOnCalendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransitionOutcome {
    /// The wizard now shows this step.
    Entered(View),
    /// Requested during the settle window and ignored.
    Dropped,
    Refused(TransitionRefusal),
}

pub struct ViewController {
    view: View,
    progress: ProgressIndicator,
    settle_window: Duration,
    settling_since: Option<Instant>,
    clock: Arc<dyn Clock>,
}

impl ViewController {
    pub fn new(
        settle_window: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            view: View::Calendar,
            progress: ProgressIndicator::for_view(View::Calendar),
            settle_window,
            settling_since: None,
            clock,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn progress(&self) -> ProgressIndicator {
        self.progress
    }

    /// Whether a view-swap animation is still presumed in flight.
    pub fn is_settling(&self) -> bool {
        self.settling_since
            .is_some_and(|since| self.clock.now().duration_since(since) < self.settle_window)
    }

    /// Calendar -> time entry.
    ///
    /// Regenerates every card from `selection` with the context's bulk
    /// defaults, discarding earlier edits, then renders the list.
    pub fn show_time_view(
        &mut self,
        selection: &DateSelection,
        ctx: &mut WizardContext,
        render: &mut RenderSync,
        hooks: &dyn WizardHooks,
    ) -> TransitionOutcome {
        if self.is_settling() {
            warn!("transition to time entry dropped while settling");
            return TransitionOutcome::Dropped;
        }
        if self.view != View::Calendar {
            return TransitionOutcome::Refused(TransitionRefusal::NotOnCalendar);
        }
        if let Err(error) = ctx.model.regenerate(selection, ctx.bulk_defaults) {
            debug!(%error, "staying on calendar");
            return TransitionOutcome::Refused(TransitionRefusal::EmptySelection);
        }
        ctx.current_modal = None;

        render.render_all(ctx.model.cards(), hooks);
        hooks.update_total_hours(&DurationCalculator::summarize(ctx.model.cards()));

        self.enter(View::TimeEntry)
    }

    /// Time entry -> calendar. Cards are left as they are until the next
    /// forward transition regenerates them.
    pub fn show_calendar_view(&mut self) -> TransitionOutcome {
        if self.is_settling() {
            warn!("transition to calendar dropped while settling");
            return TransitionOutcome::Dropped;
        }
        self.enter(View::Calendar)
    }

    fn enter(
        &mut self,
        view: View,
    ) -> TransitionOutcome {
        self.view = view;
        self.settling_since = Some(self.clock.now());
        self.progress = ProgressIndicator::for_view(view);
        debug!(?view, "entered view");
        TransitionOutcome::Entered(view)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shift_core::{BulkDefaults, ShiftTime, TimeField};

    use super::*;
    use crate::clock::ManualClock;
    use crate::components::NoopHooks;
    use crate::views::StepState;

    struct Fixture {
        clock: Arc<ManualClock>,
        views: ViewController,
        ctx: WizardContext,
        render: RenderSync,
    }

    impl Fixture {
        fn new() -> Self {
            let clock = Arc::new(ManualClock::new());
            Self {
                views: ViewController::new(DEFAULT_SETTLE_WINDOW, clock.clone()),
                clock,
                ctx: WizardContext::new(BulkDefaults::new(
                    ShiftTime::from_hm(9, 0),
                    ShiftTime::from_hm(18, 0),
                )),
                render: RenderSync::new(),
            }
        }

        fn forward(
            &mut self,
            selection: &DateSelection,
        ) -> TransitionOutcome {
            self.views
                .show_time_view(selection, &mut self.ctx, &mut self.render, &NoopHooks)
        }

        fn settle(&self) {
            self.clock.advance(DEFAULT_SETTLE_WINDOW);
        }
    }

    fn selection() -> DateSelection {
        DateSelection::from_iso_dates(["2024-06-15", "2024-06-16"]).unwrap()
    }

    #[test]
    fn starts_on_calendar_with_first_step_active() {
        let fx = Fixture::new();

        assert_eq!(fx.views.view(), View::Calendar);
        assert_eq!(fx.views.progress().steps[0], StepState::Active);
        assert!(!fx.views.is_settling());
    }

    #[test]
    fn forward_generates_cards_and_renders() {
        let mut fx = Fixture::new();

        let outcome = fx.forward(&selection());

        assert_eq!(outcome, TransitionOutcome::Entered(View::TimeEntry));
        assert_eq!(fx.ctx.model.len(), 2);
        assert_eq!(fx.render.list().total_work_days, 2);
        assert_eq!(
            fx.views.progress(),
            ProgressIndicator::for_view(View::TimeEntry)
        );
    }

    #[test]
    fn forward_with_empty_selection_stays_on_calendar() {
        let mut fx = Fixture::new();

        let outcome = fx.forward(&DateSelection::new());

        assert_eq!(
            outcome,
            TransitionOutcome::Refused(TransitionRefusal::EmptySelection)
        );
        assert_eq!(fx.views.view(), View::Calendar);
        assert!(fx.ctx.model.is_empty());
        assert!(!fx.views.is_settling());
    }

    #[test]
    fn transitions_inside_settle_window_are_dropped() {
        let mut fx = Fixture::new();
        fx.forward(&selection());
        fx.ctx
            .model
            .update_time_str(0, TimeField::Start, "10:00")
            .unwrap();

        assert_eq!(fx.views.show_calendar_view(), TransitionOutcome::Dropped);
        assert_eq!(fx.views.view(), View::TimeEntry);
        assert!(fx.ctx.model.get(0).unwrap().modified, "no regeneration happened");

        fx.clock.advance(Duration::from_millis(399));
        assert_eq!(fx.views.show_calendar_view(), TransitionOutcome::Dropped);

        fx.clock.advance(Duration::from_millis(1));
        assert_eq!(
            fx.views.show_calendar_view(),
            TransitionOutcome::Entered(View::Calendar)
        );
    }

    #[test]
    fn forward_inside_settle_window_keeps_cards() {
        let mut fx = Fixture::new();
        fx.forward(&selection());
        fx.settle();
        fx.ctx
            .model
            .update_time_str(0, TimeField::End, "21:00")
            .unwrap();
        fx.views.show_calendar_view();

        let outcome = fx.forward(&selection());

        assert_eq!(outcome, TransitionOutcome::Dropped);
        assert_eq!(fx.views.view(), View::Calendar);
        let card = fx.ctx.model.get(0).unwrap();
        assert!(card.modified, "cards were regenerated");
        assert_eq!(card.end_time, ShiftTime::from_hm(21, 0));

        fx.settle();
        assert_eq!(
            fx.forward(&selection()),
            TransitionOutcome::Entered(View::TimeEntry)
        );
        assert!(!fx.ctx.model.get(0).unwrap().modified);
    }

    #[test]
    fn forward_from_time_entry_is_refused() {
        let mut fx = Fixture::new();
        fx.forward(&selection());
        fx.settle();

        let outcome = fx.forward(&selection());

        assert_eq!(
            outcome,
            TransitionOutcome::Refused(TransitionRefusal::NotOnCalendar)
        );
    }

    #[test]
    fn back_then_forward_discards_edits() {
        let mut fx = Fixture::new();
        fx.forward(&selection());
        fx.settle();
        fx.ctx
            .model
            .update_time_str(1, TimeField::End, "23:00")
            .unwrap();

        fx.views.show_calendar_view();
        assert_eq!(fx.views.progress().steps, [
            StepState::Active,
            StepState::Neutral,
            StepState::Neutral
        ]);
        fx.settle();
        fx.forward(&selection());

        let card = fx.ctx.model.get(1).unwrap();
        assert_eq!(card.end_time, ShiftTime::from_hm(18, 0));
        assert!(!card.modified);
    }
}
