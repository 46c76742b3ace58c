use rolodex_core::{ContactName, PhoneNumber, Record};

use crate::commands::{require_contact, Context};
use crate::error::CommandError;

pub fn add_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments("Give me name and phone please."));
    };

    if let Some(record) = ctx.book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(ContactName::new(*name)?);
    record.add_phone(phone)?;
    ctx.book.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let [name, old, new, ..] = args else {
        return Err(CommandError::MissingArguments(
            "Please enter name, old phone and new phone!",
        ));
    };

    require_contact(ctx, name)?.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

pub fn show_phone(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("Enter user name!"));
    };

    let record = require_contact(ctx, name)?;
    Ok(format!("Phones: {}", join_phones(record.phones())))
}

pub fn show_all(ctx: &mut Context<'_>) -> Result<String, CommandError> {
    if ctx.book.is_empty() {
        return Ok("No contacts found".to_string());
    }
    Ok(ctx.book.to_string())
}

fn join_phones(phones: &[PhoneNumber]) -> String {
    phones
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}
