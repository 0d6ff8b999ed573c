use lb_config::ConfigError;
use lb_identity::IdentityError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl CliError {
    /// Creates Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Recovery hint for identity failures, if any.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::Identity(e) => Some(e.recovery_hint()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
