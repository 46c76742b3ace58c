mod commands;
mod error;
mod repl;
mod util;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use rolodex_store::{paths, BookFile};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "Contact book with birthday reminders")]
struct Cli {
    /// Address book file (default: ./addressbook.json)
    #[arg(long)]
    book: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
    /// Pin the date used by `birthdays` (DD.MM.YYYY)
    #[arg(long, hide = true, value_parser = util::parse_date)]
    today: Option<NaiveDate>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        book: book_path,
        today,
        ..
    } = cli;

    let book_path =
        paths::resolve_book_path(book_path).with_context(|| "resolve address book path")?;
    debug!(path = %book_path.display(), "address book path resolved");

    let file = BookFile::new(book_path);
    let mut book = file
        .load()
        .with_context(|| format!("load address book {}", file.path().display()))?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", repl::GREETING)?;

    let mut ctx = Context {
        book: &mut book,
        today,
    };
    let session = repl::run(&mut ctx, io::stdin().lock(), &mut stdout);
    match &session {
        Ok(end) => debug!(?end, "session finished"),
        Err(err) => warn!(error = %err, "session aborted, saving address book"),
    }

    file.save(&book)
        .with_context(|| format!("save address book {}", file.path().display()))?;
    info!(contacts = book.len(), "address book saved");
    session.with_context(|| "read command")?;
    writeln!(stdout, "{}", repl::FAREWELL)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = fmt()
        .with_env_filter(EnvFilter::new(default_level))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
