use chrono::{Local, NaiveDate};
use rolodex_core::domain::{Birthday, BIRTHDAY_FORMAT};

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    Birthday::parse(raw)
        .map(|birthday| birthday.date())
        .map_err(|err| err.to_string())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}
