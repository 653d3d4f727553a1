use std::fmt;

use serde::Serialize;
use shift_core::{DurationCalculator, TimeCard, opt_time_display};
use shift_core::calculations::common::format_hours_minutes;

/// Element ids and per-card field classes that collaborators look up.
pub mod ids {
    pub const VIEW_WRAPPER: &str = "viewWrapper";
    pub const TIME_LIST: &str = "timeList";
    pub const TOTAL_WORK_DAYS: &str = "totalWorkDays";
    pub const CONFIRM_DIALOG: &str = "confirmDialog";
    pub const CONFIRM_LIST: &str = "confirmList";
    pub const CONFIRM_TOTAL_DAYS: &str = "confirmTotalDays";
    pub const CONFIRM_TOTAL_HOURS: &str = "confirmTotalHours";
    pub const STEPS: [&str; 3] = ["step1", "step2", "step3"];

    pub const NEXT_TO_TIME_BTN: &str = "nextToTimeBtn";
    pub const BACK_TO_CALENDAR_BTN: &str = "backToCalendarBtn";
    pub const SUBMIT_BTN: &str = "submitBtn";
    pub const FINAL_SUBMIT: &str = "finalSubmit";
    pub const CANCEL_SUBMIT: &str = "cancelSubmit";

    pub const DATE_VALUE: &str = "date-value";
    pub const DAYOFWEEK_VALUE: &str = "dayofweek-value";
    pub const START_TIME_VALUE: &str = "start-time-value";
    pub const END_TIME_VALUE: &str = "end-time-value";
    pub const CARD_DATE: &str = "card-date";
    pub const START_DISPLAY: &str = "start-display";
    pub const END_DISPLAY: &str = "end-display";
    pub const HOURS_TEXT: &str = "hours-text";
}

/// Placeholder shown where a duration cannot be computed yet.
const NO_HOURS: &str = "-";

/// One card as it appears in the `timeList` container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RenderedCard {
    /// `data-index`
    pub data_index: usize,
    /// `data-removed`; removed cards stay in the list but are hidden.
    pub data_removed: bool,
    /// `modified` class marker.
    pub modified: bool,
    pub date_value: String,
    pub dayofweek_value: u8,
    pub start_time_value: String,
    pub end_time_value: String,
    pub card_date: String,
    pub start_display: String,
    pub end_display: String,
    pub hours_text: String,
}

impl RenderedCard {
    pub fn from_card(card: &TimeCard) -> Self {
        let start = opt_time_display(&card.start_time);
        let end = opt_time_display(&card.end_time);
        Self {
            data_index: card.index,
            data_removed: card.removed,
            modified: card.modified,
            date_value: card.date_iso(),
            dayofweek_value: card.day_of_week,
            start_time_value: start.clone(),
            end_time_value: end.clone(),
            card_date: card.display_date.clone(),
            start_display: start,
            end_display: end,
            hours_text: DurationCalculator::duration(card)
                .map(format_hours_minutes)
                .unwrap_or_else(|| NO_HOURS.to_string()),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.data_removed
    }
}

impl fmt::Display for RenderedCard {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let start = or_placeholder(&self.start_display);
        let end = or_placeholder(&self.end_display);
        let marker = if self.modified { "*" } else { " " };
        write!(
            f,
            "[{:>2}]{} {:<10} {} ～ {}  💼 {}",
            self.data_index, marker, self.card_date, start, end, self.hours_text
        )
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { "--:--" } else { value }
}

/// The `timeList` container plus the `totalWorkDays` counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedList {
    pub cards: Vec<RenderedCard>,
    pub total_work_days: usize,
}

impl RenderedList {
    /// Looks a card up by its `data-index`.
    pub fn card(
        &self,
        index: usize,
    ) -> Option<&RenderedCard> {
        self.cards.iter().find(|c| c.data_index == index)
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &RenderedCard> {
        self.cards.iter().filter(|c| c.is_visible())
    }
}

impl fmt::Display for RenderedList {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for card in self.visible_cards() {
            writeln!(f, "{card}")?;
        }
        write!(f, "出勤日数: {}日", self.total_work_days)
    }
}

/// One row of the `confirmList` container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfirmItem {
    pub confirm_date: String,
    pub confirm_time: String,
}

/// The confirmation dialog's contents and visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedConfirmation {
    pub visible: bool,
    pub items: Vec<ConfirmItem>,
    pub total_days: String,
    pub total_hours: String,
}

impl fmt::Display for RenderedConfirmation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "{:<10} {}", item.confirm_date, item.confirm_time)?;
        }
        writeln!(f, "合計日数: {}日", self.total_days)?;
        write!(f, "合計時間: {}", self.total_hours)
    }
}
