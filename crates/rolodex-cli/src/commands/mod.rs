use chrono::NaiveDate;
use rolodex_core::{AddressBook, Record};
use tracing::debug;

use crate::error::CommandError;
use crate::util::local_today;

pub mod birthdays;
pub mod contacts;

/// State every command handler works on.
pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    /// Fixed date for birthday queries; the local date when `None`.
    pub today: Option<NaiveDate>,
}

impl Context<'_> {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit,
}

/// Splits a line into a lower-cased command and its arguments. Blank lines
/// yield `None`.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

pub fn dispatch(ctx: &mut Context<'_>, command: &str, args: &[&str]) -> Outcome {
    let result = match command {
        "close" | "exit" => return Outcome::Exit,
        "hello" => Ok("Hello, how can I help you?".to_string()),
        "add" => contacts::add_contact(ctx, args),
        "change" => contacts::change_contact(ctx, args),
        "phone" => contacts::show_phone(ctx, args),
        "all" => contacts::show_all(ctx),
        "add-birthday" => birthdays::add_birthday(ctx, args),
        "show-birthday" => birthdays::show_birthday(ctx, args),
        "birthdays" => birthdays::upcoming_birthdays(ctx),
        _ => {
            debug!(command, "unknown command");
            Ok("Invalid command".to_string())
        }
    };
    match result {
        Ok(reply) => Outcome::Reply(reply),
        Err(err) => {
            debug!(command, error = ?err, "command failed");
            Outcome::Reply(err.to_string())
        }
    }
}

pub(crate) fn require_contact<'b>(
    ctx: &'b mut Context<'_>,
    name: &str,
) -> Result<&'b mut Record, CommandError> {
    ctx.book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}
