pub mod birthdays;

pub use birthdays::{
    congratulation_date, is_leap_year, next_occurrence, occurrence_in_year,
    upcoming_congratulation, UPCOMING_WINDOW_DAYS,
};
