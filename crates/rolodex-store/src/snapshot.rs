//! Versioned JSON encoding of an [`AddressBook`].
//!
//! ```json
//! { "version": 1, "contacts": [ { "name": "Ann", "phones": ["0501234567"], "birthday": "12.03.1990" } ] }
//! ```

use crate::error::{Result, StoreError};
use rolodex_core::{AddressBook, Birthday, ContactName, PhoneNumber, Record};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    contacts: Vec<ContactOut<'a>>,
}

#[derive(Debug, Serialize)]
struct ContactOut<'a> {
    name: &'a ContactName,
    phones: &'a [PhoneNumber],
    birthday: Option<&'a Birthday>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    version: u32,
    contacts: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContactV1 {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

pub fn encode(book: &AddressBook) -> Result<Vec<u8>> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        contacts: book
            .iter()
            .map(|record| ContactOut {
                name: record.name(),
                phones: record.phones(),
                birthday: record.birthday(),
            })
            .collect(),
    };
    let mut bytes = serde_json::to_vec_pretty(&snapshot)?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn decode(bytes: &[u8]) -> Result<AddressBook> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    match envelope.version {
        SNAPSHOT_VERSION => {
            let contacts: Vec<ContactV1> = serde_json::from_value(envelope.contacts)?;
            build_book(contacts)
        }
        other => Err(StoreError::UnsupportedVersion(other)),
    }
}

fn build_book(contacts: Vec<ContactV1>) -> Result<AddressBook> {
    let mut book = AddressBook::new();
    for contact in contacts {
        if book.find(contact.name.as_str()).is_some() {
            return Err(StoreError::DuplicateContact(contact.name.to_string()));
        }
        let record = Record::from_parts(contact.name, contact.phones, contact.birthday)?;
        book.add_record(record);
    }
    Ok(book)
}
