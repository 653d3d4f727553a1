//! Keeps the rendered card list and confirmation dialog in step with the
//! card model.
//!
//! Every render rebuilds from scratch, so rendering an unchanged model
//! twice gives identical output.

use shift_core::TimeCard;
use tracing::debug;

use super::dialogs::ConfirmationView;
use super::hooks::WizardHooks;
use crate::models::{ConfirmItem, RenderedCard, RenderedConfirmation, RenderedList};

#[derive(Debug, Clone, Default)]
pub struct RenderSync {
    list: RenderedList,
    confirmation: RenderedConfirmation,
}

impl RenderSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the card list and the work-day counter from `cards`.
    pub fn render_all(
        &mut self,
        cards: &[TimeCard],
        hooks: &dyn WizardHooks,
    ) -> &RenderedList {
        let rendered: Vec<RenderedCard> = cards.iter().map(RenderedCard::from_card).collect();
        for card in rendered.iter().filter(|c| c.is_visible()) {
            hooks.update_card_hours(card);
        }
        let total_work_days = cards.iter().filter(|c| c.is_active()).count();
        debug!(cards = rendered.len(), total_work_days, "rendered time list");

        self.list = RenderedList {
            cards: rendered,
            total_work_days,
        };
        &self.list
    }

    /// Fills the confirmation dialog from `view` and shows it.
    pub fn show_confirmation(
        &mut self,
        view: &ConfirmationView,
    ) -> &RenderedConfirmation {
        self.confirmation = RenderedConfirmation {
            visible: true,
            items: view
                .rows
                .iter()
                .map(|row| ConfirmItem {
                    confirm_date: row.display_date.clone(),
                    confirm_time: format!("{} 〜 {}", row.start_time, row.end_time),
                })
                .collect(),
            total_days: view.summary.total_days.to_string(),
            total_hours: view.summary.formatted_hours(),
        };
        &self.confirmation
    }

    /// Hides the confirmation dialog, keeping its last contents.
    pub fn hide_confirmation(&mut self) {
        self.confirmation.visible = false;
    }

    pub fn list(&self) -> &RenderedList {
        &self.list
    }

    pub fn confirmation(&self) -> &RenderedConfirmation {
        &self.confirmation
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use shift_core::{BulkDefaults, DateSelection, ShiftTime, TimeCardModel, TimeField};

    use super::*;
    use crate::components::{NoopHooks, SubmissionGate};

    #[derive(Default)]
    struct CountingHooks {
        card_updates: Mutex<Vec<usize>>,
    }

    impl WizardHooks for CountingHooks {
        fn update_card_hours(
            &self,
            card: &RenderedCard,
        ) {
            self.card_updates.lock().unwrap().push(card.data_index);
        }
    }

    fn model() -> TimeCardModel {
        let mut model = TimeCardModel::new();
        model
            .regenerate(
                &DateSelection::from_iso_dates(["2024-06-15", "2024-06-16", "2024-06-17"]).unwrap(),
                BulkDefaults::new(ShiftTime::from_hm(22, 0), ShiftTime::from_hm(6, 0)),
            )
            .unwrap();
        model
    }

    #[test]
    fn render_all_is_idempotent() {
        let model = model();
        let mut render = RenderSync::new();

        let first = render.render_all(model.cards(), &NoopHooks).clone();
        let second = render.render_all(model.cards(), &NoopHooks).clone();

        assert_eq!(first, second);
        assert_eq!(first.cards.len(), 3);
    }

    #[test]
    fn render_all_counts_only_active_cards() {
        let mut model = model();
        model.mark_removed(0).unwrap();
        let mut render = RenderSync::new();

        let list = render.render_all(model.cards(), &NoopHooks);

        assert_eq!(list.total_work_days, 2);
        assert_eq!(list.cards.len(), 3);
        assert!(list.card(0).unwrap().data_removed);
        assert_eq!(list.visible_cards().count(), 2);
    }

    #[test]
    fn render_all_reflects_edits_and_durations() {
        let mut model = model();
        model.update_time_str(1, TimeField::End, "07:15").unwrap();
        let mut render = RenderSync::new();

        let list = render.render_all(model.cards(), &NoopHooks);

        let card = list.card(1).unwrap();
        assert!(card.modified);
        assert_eq!(card.end_time_value, "07:15");
        assert_eq!(card.hours_text, "9時間15分");
        assert_eq!(list.card(0).unwrap().hours_text, "8時間");
    }

    #[test]
    fn render_all_notifies_hook_for_visible_cards() {
        let mut model = model();
        model.mark_removed(1).unwrap();
        let hooks = CountingHooks::default();
        let mut render = RenderSync::new();

        render.render_all(model.cards(), &hooks);

        assert_eq!(*hooks.card_updates.lock().unwrap(), vec![0, 2]);
    }

    #[test]
    fn confirmation_shows_and_hides() {
        let model = model();
        let view = SubmissionGate.validate(model.cards()).unwrap();
        let mut render = RenderSync::new();

        let shown = render.show_confirmation(&view).clone();
        render.hide_confirmation();

        assert!(shown.visible);
        assert_eq!(shown.items[0].confirm_date, "6/15(土)");
        assert_eq!(shown.items[0].confirm_time, "22:00 〜 06:00");
        assert_eq!(shown.total_days, "3");
        assert_eq!(shown.total_hours, "24時間");
        assert!(!render.confirmation().visible);
    }
}
