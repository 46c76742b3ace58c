use rolodex_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
    #[error("duplicate contact in snapshot: {0}")]
    DuplicateContact(String),
    #[error("invalid book path: {0}")]
    InvalidBookPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Json,
    Core,
    UnsupportedVersion,
    DuplicateContact,
    InvalidBookPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Json(_) => StoreErrorKind::Json,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::UnsupportedVersion(_) => StoreErrorKind::UnsupportedVersion,
            StoreError::DuplicateContact(_) => StoreErrorKind::DuplicateContact,
            StoreError::InvalidBookPath(_) => StoreErrorKind::InvalidBookPath,
        }
    }
}
