//! File-backed cache of the single local identity record.
//!
//! Every file in the store directory whose name starts with `user_config.`
//! is a record artifact; the presence of any artifact means a record exists.
//! The record itself lives in `user_config.json`. Temp files and corruption
//! backups are named outside that convention.

use crate::error::{IdentityError, Result as IdentityResult};

use lb_core::IdentityRecord;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

pub const RECORD_FILENAME: &str = "user_config.json";

const ARTIFACT_PREFIX: &str = "user_config.";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone)]
pub struct LocalRecordStore {
    dir: PathBuf,
}

impl LocalRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn record_path(&self) -> PathBuf {
        self.dir.join(RECORD_FILENAME)
    }

    /// Creates the store directory if it is missing.
    pub fn ensure_dir(&self) -> IdentityResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| IdentityError::dir_creation(self.dir.clone(), e))
    }

    /// True if any record artifact is present.
    ///
    /// A store directory that cannot be read is an error, not an empty store.
    pub fn exists(&self) -> IdentityResult<bool> {
        Ok(!self.artifacts()?.is_empty())
    }

    /// Loads the record.
    ///
    /// Returns `NotFound` when no artifact exists and `Corrupted` when the
    /// record cannot be parsed or only stray artifacts are left.
    pub fn load(&self) -> IdentityResult<IdentityRecord> {
        let path = self.record_path();

        if !path.exists() {
            if self.exists()? {
                return Err(IdentityError::corrupted(
                    path,
                    "record file missing but other record artifacts are present",
                ));
            }
            info!("No identity record at {path:?} (first launch)");
            return Err(IdentityError::not_found(path));
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| IdentityError::file_read(path.clone(), e))?;

        let record = serde_json::from_str::<IdentityRecord>(&contents)
            .map_err(|e| IdentityError::corrupted(path.clone(), e.to_string()))?;

        info!("Loaded identity record for '{}'", record.username);
        Ok(record)
    }

    /// Saves the record using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    pub fn save(&self, record: &IdentityRecord) -> IdentityResult<()> {
        self.ensure_dir()?;

        let final_path = self.record_path();
        let temp_path = self
            .dir
            .join(format!(".user_config.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(record)?;

        // The handle is closed at the end of this block on every path.
        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

            let written = file
                .write_all(json.as_bytes())
                .and_then(|()| file.sync_all());

            if let Err(e) = written {
                let _ = fs::remove_file(&temp_path);
                return Err(IdentityError::file_write(temp_path, e));
            }
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            IdentityError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        info!("Saved identity record for '{}'", record.username);
        Ok(())
    }

    /// Removes every record artifact. Succeeds when there is nothing to remove.
    pub fn purge(&self) -> IdentityResult<()> {
        for path in self.artifacts()? {
            match fs::remove_file(&path) {
                Ok(()) => debug!("Removed {path:?}"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(IdentityError::purge(path, e)),
            }
        }

        info!("Purged identity record in {:?}", self.dir);
        Ok(())
    }

    /// Moves every record artifact aside as `corrupted_{timestamp}_{name}`.
    ///
    /// Returns the backup paths; empty when there was nothing to back up.
    pub fn backup_corrupted(&self) -> IdentityResult<Vec<PathBuf>> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backups = Vec::new();

        for path in self.artifacts()? {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let backup_path = self.dir.join(format!("corrupted_{timestamp}_{file_name}"));

            fs::rename(&path, &backup_path)
                .map_err(|e| IdentityError::backup_failed(path.clone(), e))?;

            warn!("Backed up corrupted identity to {backup_path:?}");
            backups.push(backup_path);
        }

        Ok(backups)
    }

    /// Record artifacts in the store directory. A missing directory has none.
    fn artifacts(&self) -> IdentityResult<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(IdentityError::file_read(self.dir.clone(), e)),
        };

        let mut artifacts = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| IdentityError::file_read(self.dir.clone(), e))?;
            let path = entry.path();

            let is_artifact = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(ARTIFACT_PREFIX));

            if is_artifact && path.is_file() {
                artifacts.push(path);
            }
        }

        Ok(artifacts)
    }
}
