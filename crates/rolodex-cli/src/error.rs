use anyhow::Error;
use rolodex_core::CoreError;
use rolodex_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Failures of a single command. Each one is reported to the operator and
/// the session continues.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    MissingArguments(&'static str),
    #[error("Contact {0} is not in contacts.")]
    ContactNotFound(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// One line with the whole context chain, outermost first.
pub fn format_error(err: &Error) -> String {
    format!("error: {:#}", err)
}

pub fn report_error(err: &Error) {
    eprintln!("{}", format_error(err));
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
    }
    EXIT_FAILURE
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::Io => EXIT_FAILURE,
        StoreErrorKind::Json
        | StoreErrorKind::Core
        | StoreErrorKind::UnsupportedVersion
        | StoreErrorKind::DuplicateContact
        | StoreErrorKind::InvalidBookPath => EXIT_INVALID_INPUT,
    }
}
