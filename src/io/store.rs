use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::common::error::AppError;
use crate::domain::ledger::Ledger;

/// Flat-file persistence for the ledger.
///
/// The whole ledger is read once at startup and rewritten in full after
/// every mutating operation. Saves go through a temp file in the target
/// directory followed by an atomic rename, so a reader always observes a
/// complete snapshot, never a partial write.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted ledger, or an empty one when no file exists yet.
    ///
    /// # Errors
    ///
    /// `AppError::CorruptState` when the file exists but cannot be parsed
    /// as the record schema; the caller must not proceed on it.
    pub fn load(&self) -> Result<Ledger, AppError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no ledger file, starting empty");
                return Ok(Ledger::new());
            }
            Err(err) => return Err(AppError::Io(err)),
        };

        let ledger = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| AppError::CorruptState(err.to_string()))?;
        tracing::debug!(path = %self.path.display(), "ledger loaded");
        Ok(ledger)
    }

    /// Writes the full ledger snapshot.
    ///
    /// # Errors
    ///
    /// `AppError::Persistence` on any write failure; the in-memory ledger
    /// stays authoritative for the rest of the process lifetime.
    pub fn save(&self, ledger: &Ledger) -> Result<(), AppError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|err| AppError::Persistence(err.to_string()))?;
        serde_json::to_writer_pretty(tmp.as_file(), ledger)
            .map_err(|err| AppError::Persistence(err.to_string()))?;
        tmp.persist(&self.path)
            .map_err(|err| AppError::Persistence(err.to_string()))?;

        tracing::debug!(path = %self.path.display(), "ledger persisted");
        Ok(())
    }
}
