use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Invalid table identifier '{name}': only a-z, 0-9 and '_' are allowed {location}")]
    InvalidIdentifier {
        name: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Creates InvalidIdentifier error at caller location.
    #[track_caller]
    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
