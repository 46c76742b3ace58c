use crate::domain::birthday::Birthday;
use crate::domain::name::ContactName;
use crate::domain::phone::PhoneNumber;
use crate::error::CoreError;
use std::fmt;

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Rebuilds a record from already validated parts, rejecting duplicate
    /// phones.
    pub fn from_parts(
        name: ContactName,
        phones: Vec<PhoneNumber>,
        birthday: Option<Birthday>,
    ) -> Result<Self, CoreError> {
        let mut record = Self::new(name);
        for phone in phones {
            record.push_phone(phone)?;
        }
        record.birthday = birthday;
        Ok(record)
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<&[PhoneNumber], CoreError> {
        let phone = PhoneNumber::parse(raw)?;
        self.push_phone(phone)?;
        Ok(&self.phones)
    }

    /// Replaces `old` with `new` at the same position. `old` is matched
    /// against the stored text as given; `new` must be a valid phone.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<&[PhoneNumber], CoreError> {
        let replacement = PhoneNumber::parse(new)?;
        let idx = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| CoreError::PhoneNotFound(old.to_string()))?;
        if self
            .phones
            .iter()
            .enumerate()
            .any(|(pos, phone)| pos != idx && *phone == replacement)
        {
            return Err(CoreError::DuplicatePhone(replacement.to_string()));
        }
        self.phones[idx] = replacement;
        Ok(&self.phones)
    }

    pub fn find_phone(&self, raw: &str) -> Result<&PhoneNumber, CoreError> {
        let phone = PhoneNumber::parse(raw)?;
        self.phones
            .iter()
            .find(|stored| **stored == phone)
            .ok_or_else(|| CoreError::PhoneNotFound(phone.to_string()))
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<&Birthday, CoreError> {
        let birthday = Birthday::parse(raw)?;
        Ok(&*self.birthday.insert(birthday))
    }

    fn push_phone(&mut self, phone: PhoneNumber) -> Result<(), CoreError> {
        if self.phones.contains(&phone) {
            return Err(CoreError::DuplicatePhone(phone.to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{birthday}"),
            None => f.write_str("unknown"),
        }
    }
}
