//! Ordered per-date shift records derived from a date selection.
//!
//! The model is rebuilt wholesale every time the wizard moves from the
//! calendar to the time-entry step. Edits made before that point are lost on
//! regeneration; cards are addressed by their generation index only.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::date_selection::DateSelection;
use super::shift_time::ShiftTime;
use super::time_card::{BulkDefaults, TimeCard, TimeField};
use crate::error::ModelError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCardModel {
    cards: Vec<TimeCard>,
}

impl TimeCardModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives one card per selected date, in ascending date order.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptySelection`] when `selection` has no dates.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_core::{BulkDefaults, DateSelection, ShiftTime, TimeCardModel};
    ///
    /// let selection = DateSelection::from_iso_dates(["2024-06-16", "2024-06-15"]).unwrap();
    /// let defaults = BulkDefaults::new(ShiftTime::from_hm(9, 0), ShiftTime::from_hm(18, 0));
    ///
    /// let cards = TimeCardModel::generate(&selection, defaults).unwrap();
    ///
    /// assert_eq!(cards[0].display_date, "6/15(土)");
    /// assert_eq!(cards[1].index, 1);
    /// ```
    pub fn generate(
        selection: &DateSelection,
        defaults: BulkDefaults,
    ) -> Result<Vec<TimeCard>, ModelError> {
        if selection.is_empty() {
            return Err(ModelError::EmptySelection);
        }
        Ok(selection
            .iter()
            .enumerate()
            .map(|(index, date)| TimeCard::new(index, date, defaults))
            .collect())
    }

    /// Replaces every card with a fresh generation from `selection`.
    ///
    /// On error the current cards are left untouched.
    pub fn regenerate(
        &mut self,
        selection: &DateSelection,
        defaults: BulkDefaults,
    ) -> Result<&[TimeCard], ModelError> {
        let cards = Self::generate(selection, defaults)?;
        info!(count = cards.len(), "generated time cards");
        self.cards = cards;
        Ok(&self.cards)
    }

    /// Sets one end of a card's shift and marks the card modified.
    pub fn update_time(
        &mut self,
        index: usize,
        field: TimeField,
        value: ShiftTime,
    ) -> Result<(), ModelError> {
        let card = self.card_mut(index)?;
        match field {
            TimeField::Start => card.start_time = Some(value),
            TimeField::End => card.end_time = Some(value),
        }
        card.modified = true;
        debug!(index, %field, %value, "updated card time");
        Ok(())
    }

    /// Same as [`update_time`](Self::update_time) but takes the raw `HH:MM`
    /// string handed over by the time picker.
    pub fn update_time_str(
        &mut self,
        index: usize,
        field: TimeField,
        value: &str,
    ) -> Result<(), ModelError> {
        let time = ShiftTime::parse(value)?;
        self.update_time(index, field, time)
    }

    /// Marks a card removed. Returns `false` when it already was.
    pub fn mark_removed(
        &mut self,
        index: usize,
    ) -> Result<bool, ModelError> {
        let card = self.card_mut(index)?;
        if card.removed {
            return Ok(false);
        }
        card.removed = true;
        debug!(index, "removed card");
        Ok(true)
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&TimeCard> {
        self.cards.get(index)
    }

    /// Every card of the current generation, removed ones included.
    pub fn cards(&self) -> &[TimeCard] {
        &self.cards
    }

    /// Cards that still count towards totals and submission.
    pub fn active_cards(&self) -> impl Iterator<Item = &TimeCard> {
        self.cards.iter().filter(|c| c.is_active())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    fn card_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut TimeCard, ModelError> {
        self.cards
            .get_mut(index)
            .ok_or(ModelError::UnknownCard { index })
    }
}
