use crate::error::ValidationError;
use crate::models::{TimeCard, TimeField};

/// Checks that every non-removed card has both a start and an end time.
///
/// Cards are checked in the given order and the first gap wins, start
/// before end on the same card.
///
/// # Errors
///
/// [`ValidationError::IncompleteCard`] naming the first offending card.
pub fn validate_cards<'a, I>(cards: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a TimeCard>,
{
    for card in cards.into_iter().filter(|c| c.is_active()) {
        for field in [TimeField::Start, TimeField::End] {
            if card.time(field).is_none() {
                return Err(ValidationError::IncompleteCard {
                    index: card.index,
                    field,
                });
            }
        }
    }
    Ok(())
}
