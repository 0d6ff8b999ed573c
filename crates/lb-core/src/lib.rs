pub mod error;
pub mod identity_record;
pub mod prompt;
pub mod validators;

#[cfg(any(test, feature = "test-support"))]
pub mod scripted_prompter;


pub use error::{CoreError, Result};
pub use identity_record::IdentityRecord;
pub use prompt::{Prompter, parse_menu_choice, render_menu};
pub use validators::{
    EMAIL_CONFIRM_PROMPT, EMAIL_PROMPT, SECRET_CONFIRM_PROMPT, SECRET_PROMPT,
    is_valid_email_format, is_valid_table_identifier, normalize_username, validate_email,
    validate_secret_confirmation,
};

#[cfg(any(test, feature = "test-support"))]
pub use scripted_prompter::ScriptedPrompter;

pub use error_location::ErrorLocation;
