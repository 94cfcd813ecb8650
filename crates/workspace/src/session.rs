//! Logged-in session state read from the user config directory.
//!
//! The login flow writes `session.json` under the cachet config dir;
//! this module only reads it. A missing file simply means nobody is
//! logged in, so [`load`] treats it as the logged-out default rather
//! than an error.

use std::path::{Path, PathBuf};

use {
    directories::ProjectDirs,
    secrecy::{ExposeSecret, SecretString},
    serde::Deserialize,
    tracing::debug,
};

use crate::error::{Error, Result};

/// File name of the stored session inside the config directory.
pub const SESSION_FILE: &str = "session.json";

/// What the guards need to know about the current login.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub expired: bool,
    #[serde(default)]
    pub credentials: Credentials,
}

/// Stored credential fields. Token and private key never appear in logs
/// or `Debug` output.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub token: Option<SecretString>,
    #[serde(default)]
    pub private_key: Option<SecretString>,
}

impl Credentials {
    /// True when every stored credential field is absent or empty.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
            && is_blank(self.token.as_ref())
            && is_blank(self.private_key.as_ref())
    }
}

fn is_blank(secret: Option<&SecretString>) -> bool {
    secret.is_none_or(|s| s.expose_secret().is_empty())
}

/// Path of the session file, if a config directory can be resolved.
pub fn session_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cachet").map(|dirs| dirs.config_dir().join(SESSION_FILE))
}

/// Read the current session, treating a missing file as logged out.
pub fn load() -> Result<UserDetails> {
    match session_path() {
        Some(path) if path.is_file() => load_from(&path),
        _ => Ok(UserDetails::default()),
    }
}

/// Read a session from an explicit path.
pub fn load_from(path: &Path) -> Result<UserDetails> {
    let raw = std::fs::read_to_string(path)?;
    let details = serde_json::from_str(&raw).map_err(|source| Error::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "read session file");
    Ok(details)
}
