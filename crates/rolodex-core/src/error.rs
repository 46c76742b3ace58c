use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyContactName,
    #[error("Invalid phone format: {0}. Phone must contain 10 digits.")]
    InvalidPhoneFormat(String),
    #[error("Invalid date format: {0}. Use DD.MM.YYYY.")]
    InvalidDateFormat(String),
    #[error("Phone {0} already exists.")]
    DuplicatePhone(String),
    #[error("Phone {0} is not in contacts.")]
    PhoneNotFound(String),
}
