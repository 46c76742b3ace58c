pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use name::ContactName;
pub use phone::{PhoneNumber, PHONE_DIGITS};
pub use record::Record;
