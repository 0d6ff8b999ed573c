use lb_core::CoreError;
use lb_db::DbError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors related to local identity management.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("No identity record at {path} {location}")]
    NotFound {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read identity file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write identity file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Identity file corrupted at {path}: {message} {location}")]
    Corrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize identity: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to backup corrupted file {path}: {source} {location}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to purge identity file {path}: {source} {location}")]
    Purge {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Backend error: {source}")]
    Backend {
        #[from]
        source: DbError,
    },

    #[error("Input error: {source}")]
    Prompt {
        #[from]
        source: CoreError,
    },
}

impl IdentityError {
    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "No local identity yet. Run setup to create or bind one.",
            Self::DirCreation { .. } | Self::FileWrite { .. } => {
                "Unable to write to the config directory. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read identity file. \
                   The file may be locked by another process."
            }
            Self::Corrupted { .. } => {
                "Your identity file is corrupted. \
                   A backup will be created and you'll need to set up again."
            }
            Self::Serialization { .. } => {
                "Internal error preparing identity data. \
                   Please report this issue."
            }
            Self::AtomicRename { .. } => {
                "Unable to save identity file safely. \
                   Check disk space and try again."
            }
            Self::BackupFailed { .. } | Self::Purge { .. } => {
                "Unable to clean up the old identity file. \
                   Check file permissions in the config directory."
            }
            Self::Backend { .. } => {
                "Unable to reach the database. \
                   Check the database path in config.toml."
            }
            Self::Prompt { .. } => "Input ended before setup finished. Run again to continue.",
        }
    }

    /// Creates NotFound error at caller location.
    #[track_caller]
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound {
            path,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Corrupted error at caller location.
    #[track_caller]
    pub fn corrupted(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Corrupted {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileRead error at caller location.
    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileWrite error at caller location.
    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates BackupFailed error at caller location.
    #[track_caller]
    pub fn backup_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::BackupFailed {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Purge error at caller location.
    #[track_caller]
    pub fn purge(path: PathBuf, source: std::io::Error) -> Self {
        Self::Purge {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
