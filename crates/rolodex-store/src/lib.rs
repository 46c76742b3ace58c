pub mod error;
pub mod paths;
pub mod snapshot;

use crate::error::{Result, StoreError};
use rolodex_core::AddressBook;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The snapshot file an [`AddressBook`] is loaded from and saved to.
pub struct BookFile {
    path: PathBuf,
}

impl BookFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file yields an empty book.
    pub fn load(&self) -> Result<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot, starting empty");
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(err.into()),
        };
        let book = snapshot::decode(&bytes)?;
        debug!(path = %self.path.display(), contacts = book.len(), "snapshot loaded");
        Ok(book)
    }

    /// Replaces the snapshot with `book`. The new content is written to a
    /// sibling file and renamed over the old one, then the directory is
    /// synced.
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        paths::ensure_parent_dir(&self.path)?;
        let bytes = snapshot::encode(book)?;
        let tmp = paths::temp_path_for(&self.path)?;
        let written = write_synced(&tmp, &bytes)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(StoreError::from));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        paths::sync_parent_dir(&self.path)?;
        debug!(path = %self.path.display(), contacts = book.len(), "snapshot saved");
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    paths::restrict_file_permissions(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
