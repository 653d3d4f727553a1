mod date_selection;
mod shift_time;
mod time_card;
mod time_card_model;

pub use date_selection::{DateSelection, parse_iso_date};
pub use shift_time::{MINUTES_PER_DAY, ShiftTime, opt_time_display};
pub use time_card::{BulkDefaults, TimeCard, TimeField, WEEKDAY_LABELS, day_of_week, display_label};
pub use time_card_model::TimeCardModel;
