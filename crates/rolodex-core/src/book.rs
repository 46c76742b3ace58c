use crate::domain::{ContactName, Record};
use crate::dto::UpcomingBirthdayDto;
use crate::rules::upcoming_congratulation;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// Name-keyed collection of records that iterates in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<ContactName, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name. An existing record with the same name
    /// is replaced and keeps its position.
    pub fn add_record(&mut self, record: Record) -> &mut Record {
        let idx = match self.index.get(record.name().as_str()) {
            Some(&idx) => {
                self.records[idx] = record;
                idx
            }
            None => {
                let idx = self.records.len();
                self.index.insert(record.name().clone(), idx);
                self.records.push(record);
                idx
            }
        };
        &mut self.records[idx]
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.index.get(name).map(|&idx| &mut self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Records whose next birthday is at most `window_days` away from
    /// `today`, in book order, with weekend dates moved to Monday.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthdayDto> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let congratulation_date =
                    upcoming_congratulation(birthday.date(), today, window_days)?;
                Some(UpcomingBirthdayDto {
                    name: record.name().to_string(),
                    congratulation_date,
                })
            })
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, record) in self.records.iter().enumerate() {
            if pos > 0 {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AddressBook;
    use crate::domain::{ContactName, Record};
    use crate::rules::UPCOMING_WINDOW_DAYS;
    use chrono::NaiveDate;

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        let mut record = Record::new(ContactName::new(name).unwrap());
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn find_on_empty_book_is_none() {
        let book = AddressBook::new();
        assert!(book.find("Ann").is_none());
        assert!(book.find("").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["0501234567"], None));
        assert!(book.find("Ann").is_some());
        assert!(book.find("ann").is_none());
        assert!(book.find("Ann ").is_none());
    }

    #[test]
    fn add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["0501234567"], None));
        book.add_record(record("Bob", &["0501234568"], None));
        book.add_record(record("Ann", &["0609999999"], None));

        assert_eq!(book.len(), 2);
        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Ann", "Bob"]);
        assert_eq!(book.find("Ann").unwrap().phones()[0].as_str(), "0609999999");
    }

    #[test]
    fn find_mut_mutates_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[], None));
        book.find_mut("Ann").unwrap().add_phone("0501234567").unwrap();
        assert_eq!(book.find("Ann").unwrap().phones().len(), 1);
    }

    #[test]
    fn upcoming_birthdays_scenario() {
        // 2024-03-10 is a Sunday.
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[], Some("12.03.2024")));
        book.add_record(record("Bob", &[], Some("16.03.2024")));
        book.add_record(record("Cara", &[], Some("01.01.2024")));
        book.add_record(record("Dan", &["0501234567"], None));

        let upcoming = book.upcoming_birthdays(date(2024, 3, 10), UPCOMING_WINDOW_DAYS);
        let got: Vec<_> = upcoming
            .iter()
            .map(|item| (item.name.as_str(), item.congratulation_date))
            .collect();
        assert_eq!(
            got,
            [("Ann", date(2024, 3, 12)), ("Bob", date(2024, 3, 18))]
        );
    }

    #[test]
    fn upcoming_birthdays_follow_book_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Late", &[], Some("15.03.1980")));
        book.add_record(record("Early", &[], Some("11.03.1985")));

        let upcoming = book.upcoming_birthdays(date(2024, 3, 11), UPCOMING_WINDOW_DAYS);
        let names: Vec<_> = upcoming.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Late", "Early"]);
    }

    #[test]
    fn upcoming_birthdays_leave_records_untouched() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", &[], Some("16.03.2024")));
        let _ = book.upcoming_birthdays(date(2024, 3, 10), UPCOMING_WINDOW_DAYS);
        assert_eq!(
            book.find("Bob").unwrap().birthday().unwrap().to_string(),
            "16.03.2024"
        );
    }

    #[test]
    fn display_joins_records_by_line() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["0501234567"], Some("12.03.1990")));
        book.add_record(record("Bob", &[], None));
        assert_eq!(
            book.to_string(),
            "Contact name: Ann, phones: 0501234567, birthday: 12.03.1990\n\
             Contact name: Bob, phones: , birthday: unknown"
        );
    }
}
