use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const UPCOMING_WINDOW_DAYS: u32 = 7;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The birthday's month and day in `year`. A 29 February birthday falls on
/// 28 February in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    let (month, day) = (birthday.month(), birthday.day());
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First occurrence of the birthday on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        return occurrence_in_year(birthday, today.year() + 1);
    }
    Some(this_year)
}

/// Moves weekend dates to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> Option<NaiveDate> {
    match occurrence.weekday() {
        Weekday::Sat => occurrence.checked_add_days(Days::new(2)),
        Weekday::Sun => occurrence.checked_add_days(Days::new(1)),
        _ => Some(occurrence),
    }
}

/// Congratulation date for a birthday due within `window_days` of `today`,
/// both ends inclusive.
pub fn upcoming_congratulation(
    birthday: NaiveDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let distance = (occurrence - today).num_days();
    if !(0..=i64::from(window_days)).contains(&distance) {
        return None;
    }
    congratulation_date(occurrence)
}
