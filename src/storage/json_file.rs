//! Shift store backed by a single JSON document on disk.

use super::{ShiftStore, codec};
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::ui::messages::warning;
use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read: a missing file is an empty list, anything unreadable is an error.
    pub fn try_load(&self) -> AppResult<Vec<Shift>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => codec::decode(&payload),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::StorageRead(e.to_string())),
        }
    }

    /// Create an empty document if none exists yet.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if !self.path.exists() {
            self.save(&[])?;
        }
        Ok(())
    }

    /// Move an unreadable data file aside so the next write cannot erase it.
    ///
    /// Returns the backup path when a file was moved.
    pub fn backup_unreadable(&self) -> AppResult<Option<PathBuf>> {
        let Err(AppError::StorageRead(reason)) = self.try_load() else {
            return Ok(None);
        };
        if !self.path.is_file() {
            return Ok(None);
        }

        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{}.bak", Local::now().format("%Y%m%d-%H%M%S")));
        let backup = PathBuf::from(backup);

        fs::rename(&self.path, &backup).map_err(|source| AppError::StorageWrite {
            path: backup.clone(),
            source,
        })?;
        warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            "unreadable shift data moved aside: {reason}"
        );
        warning(format!(
            "Shift data in {} could not be read; it was saved as {}.",
            self.path.display(),
            backup.display()
        ));
        Ok(Some(backup))
    }

    fn write_atomically(&self, payload: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)
    }
}

impl ShiftStore for JsonFileStore {
    fn load(&self) -> Vec<Shift> {
        match self.try_load() {
            Ok(shifts) => {
                debug!(path = %self.path.display(), count = shifts.len(), "shifts loaded");
                shifts
            }
            Err(e) => {
                warn!(path = %self.path.display(), "ignoring unreadable shift data: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, shifts: &[Shift]) -> AppResult<()> {
        self.backup_unreadable()?;
        let payload = codec::encode(shifts)?;
        self.write_atomically(&payload).map_err(|source| {
            error!(path = %self.path.display(), "failed to write shift data: {source}");
            AppError::StorageWrite {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(path = %self.path.display(), count = shifts.len(), "shifts saved");
        Ok(())
    }
}
