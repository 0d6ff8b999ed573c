use crate::{Prompter, Result as CoreResult};

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

pub const SECRET_PROMPT: &str = "Create a password:";
pub const SECRET_CONFIRM_PROMPT: &str = "Confirm password:";
pub const EMAIL_PROMPT: &str = "Enter your email:";
pub const EMAIL_CONFIRM_PROMPT: &str = "Confirm your email:";

const SECRET_MISMATCH_MESSAGE: &str = "Password does not match please try again";
const EMAIL_FORMAT_MESSAGE: &str = "Email format incorrect";
const EMAIL_MISMATCH_MESSAGE: &str = "Emails do not match please try again";

// local-part @ domain . 2-4 letter extension
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$")
        .expect("invalid email pattern")
});

const RESERVED_TABLE_PREFIX: &str = "sqlite_";

static TABLE_IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("invalid identifier pattern"));

/// Lowercases `raw` and removes every whitespace character, wherever it occurs.
pub fn normalize_username(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

pub fn is_valid_email_format(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether `name` may be used as a backend table name.
///
/// Identifiers cannot be bound as query parameters, so only lowercase ASCII
/// letters, digits and underscores are accepted. Names under SQLite's
/// reserved `sqlite_` prefix are rejected as well.
pub fn is_valid_table_identifier(name: &str) -> bool {
    TABLE_IDENTIFIER_PATTERN.is_match(name) && !name.starts_with(RESERVED_TABLE_PREFIX)
}

/// Prompts for a secret and its confirmation until both entries agree.
pub fn validate_secret_confirmation<P: Prompter + ?Sized>(prompter: &mut P) -> CoreResult<String> {
    loop {
        let secret = prompter.input_password(SECRET_PROMPT)?;
        let confirmation = prompter.input_password(SECRET_CONFIRM_PROMPT)?;

        if secret == confirmation {
            return Ok(secret);
        }

        debug!("Secret confirmation mismatch, prompting again");
        prompter.notify(SECRET_MISMATCH_MESSAGE);
    }
}

/// Prompts for an email and its confirmation until the first entry is well
/// formed and both entries are identical. Every retry starts over from the
/// first entry.
pub fn validate_email<P: Prompter + ?Sized>(prompter: &mut P) -> CoreResult<String> {
    loop {
        let email = prompter.input_str(EMAIL_PROMPT)?;
        let confirmation = prompter.input_str(EMAIL_CONFIRM_PROMPT)?;

        if !is_valid_email_format(&email) {
            debug!("Rejected malformed email");
            prompter.notify(EMAIL_FORMAT_MESSAGE);
            continue;
        }

        if email == confirmation {
            return Ok(email);
        }

        debug!("Email confirmation mismatch, prompting again");
        prompter.notify(EMAIL_MISMATCH_MESSAGE);
    }
}
