use rolodex_core::{AddressBook, ContactName, Record};
use rolodex_store::error::StoreError;
use rolodex_store::BookFile;
use std::fs;
use tempfile::TempDir;

fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(ContactName::new(name).expect("name"));
    for phone in phones {
        record.add_phone(phone).expect("phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("birthday");
    }
    record
}

fn round_trip(book: &AddressBook) -> AddressBook {
    let temp = TempDir::new().expect("tempdir");
    let file = BookFile::new(temp.path().join("addressbook.json"));
    file.save(book).expect("save");
    file.load().expect("load")
}

#[test]
fn load_missing_file_returns_empty_book() {
    let temp = TempDir::new().expect("tempdir");
    let file = BookFile::new(temp.path().join("missing.json"));
    let book = file.load().expect("load");
    assert!(book.is_empty());
}

#[test]
fn save_and_load_empty_book() {
    let loaded = round_trip(&AddressBook::new());
    assert!(loaded.is_empty());
}

#[test]
fn save_and_load_single_record() {
    let mut book = AddressBook::new();
    book.add_record(record("Ann", &["0501234567"], Some("12.03.1990")));
    let loaded = round_trip(&book);
    assert_eq!(loaded, book);
}

#[test]
fn save_and_load_preserves_order_phones_and_birthdays() {
    let mut book = AddressBook::new();
    book.add_record(record("Zed", &["0501234567", "0000000001"], None));
    book.add_record(record("Ann", &[], Some("29.02.2000")));
    book.add_record(record("Mia", &["0609999999"], Some("01.01.1970")));

    let loaded = round_trip(&book);
    assert_eq!(loaded, book);
    let names: Vec<_> = loaded.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, ["Zed", "Ann", "Mia"]);
    let zed_phones: Vec<_> = loaded
        .find("Zed")
        .expect("zed")
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect();
    assert_eq!(zed_phones, ["0501234567", "0000000001"]);
    assert_eq!(loaded.to_string(), book.to_string());
}

#[test]
fn save_overwrites_previous_snapshot() {
    let temp = TempDir::new().expect("tempdir");
    let file = BookFile::new(temp.path().join("addressbook.json"));

    let mut book = AddressBook::new();
    book.add_record(record("Ann", &["0501234567"], None));
    book.add_record(record("Bob", &["0501234568"], None));
    file.save(&book).expect("save first");

    let mut smaller = AddressBook::new();
    smaller.add_record(record("Cara", &[], None));
    file.save(&smaller).expect("save second");

    let loaded = file.load().expect("load");
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find("Cara").is_some());
    assert!(!temp.path().join("addressbook.json.tmp").exists());
}

#[test]
fn save_creates_parent_directories() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("nested").join("dir").join("book.json");
    let file = BookFile::new(&path);
    file.save(&AddressBook::new()).expect("save");
    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn save_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("addressbook.json");
    BookFile::new(&path)
        .save(&AddressBook::new())
        .expect("save");
    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn load_corrupt_file_is_an_error() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("addressbook.json");
    fs::write(&path, "not json").expect("write");
    let err = BookFile::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}

#[test]
fn load_directory_is_an_io_error() {
    let temp = TempDir::new().expect("tempdir");
    let err = BookFile::new(temp.path()).load().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn loaded_book_answers_birthday_queries() {
    let mut book = AddressBook::new();
    book.add_record(record("Bob", &[], Some("16.03.2024")));
    let loaded = round_trip(&book);

    let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 10).expect("date");
    let upcoming = loaded.upcoming_birthdays(today, 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(
        upcoming[0].congratulation_date,
        chrono::NaiveDate::from_ymd_opt(2024, 3, 18).expect("date")
    );
}
