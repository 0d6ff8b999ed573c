pub mod bootstrap_state;
pub mod bootstrapper;
pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

pub use bootstrap_state::{BootstrapOutcome, BootstrapState};
pub use bootstrapper::{
    EXISTING_USERNAME_PROMPT, IdentityBootstrapper, MENU_OPTIONS, NAME_PROMPT,
    NEW_USERNAME_PROMPT,
};
pub use error::{IdentityError, Result};
pub use store::{LocalRecordStore, RECORD_FILENAME};
