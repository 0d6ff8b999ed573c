use std::fmt;

use serde::{Deserialize, Serialize};

/// The locally cached identity of the active user.
///
/// Serialized with the on-disk key names `name`, `user`, `password` and
/// `email`. The secret is kept verbatim and never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub name: String,
    #[serde(rename = "user")]
    pub username: String,
    #[serde(rename = "password")]
    pub secret: String,
    #[serde(default)]
    pub email: String,
}

impl IdentityRecord {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            secret: secret.into(),
            email: email.into(),
        }
    }
}

impl fmt::Debug for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityRecord")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}
