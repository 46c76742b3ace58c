use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthdayDto {
    pub name: String,
    pub congratulation_date: NaiveDate,
}
