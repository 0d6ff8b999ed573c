use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read input for '{prompt}': {source} {location}")]
    Prompt {
        prompt: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Input closed while waiting for '{prompt}' {location}")]
    InputClosed {
        prompt: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates Prompt error at caller location.
    #[track_caller]
    pub fn prompt(prompt: impl Into<String>, source: std::io::Error) -> Self {
        Self::Prompt {
            prompt: prompt.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InputClosed error at caller location.
    #[track_caller]
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
