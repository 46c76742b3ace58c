use rolodex_core::rules::UPCOMING_WINDOW_DAYS;

use crate::commands::{require_contact, Context};
use crate::error::CommandError;
use crate::util::format_date;

pub fn add_birthday(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let [name, date, ..] = args else {
        return Err(CommandError::MissingArguments(
            "Please enter name and date of birthday!",
        ));
    };

    require_contact(ctx, name)?.add_birthday(date)?;
    Ok("Birthday added".to_string())
}

pub fn show_birthday(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("Enter user name!"));
    };

    let record = require_contact(ctx, name)?;
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday unknown".to_string(),
    })
}

pub fn upcoming_birthdays(ctx: &mut Context<'_>) -> Result<String, CommandError> {
    if ctx.book.is_empty() {
        return Ok("No contacts found".to_string());
    }

    let upcoming = ctx.book.upcoming_birthdays(ctx.today(), UPCOMING_WINDOW_DAYS);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays found".to_string());
    }

    Ok(upcoming
        .iter()
        .map(|item| {
            format!(
                "Congratulate {} on {}",
                item.name,
                format_date(item.congratulation_date)
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
