//! Preconditions commands check before talking to the service.
//!
//! Every guard returns an error instead of exiting so the library stays
//! testable; the binary's dispatch edge turns a [`PreconditionError`]
//! into a message and a non-zero exit.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    link::{self, WorkspaceLink},
    session::UserDetails,
};

/// An unmet precondition, with a user-facing remediation message.
#[derive(Debug, thiserror::Error)]
pub enum PreconditionError {
    #[error("you must be logged in to run this command; run [cachet login] first")]
    NotLoggedIn,

    #[error("your login has expired; run [cachet login] again")]
    LoginExpired,

    #[error("one or more stored login details are missing; run [cachet login] again")]
    IncompleteCredentials,

    #[error(
        "no service token found in your environment; set {} and retry",
        crate::token::TOKEN_ENV_VAR
    )]
    MissingServiceToken,

    #[error("this project is not connected to a workspace yet; run [cachet init], then retry")]
    NotLinked,

    #[error("unable to read the project link file; run [cachet init] to relink the project")]
    UnreadableLink(#[source] crate::Error),

    #[error("the workspace id is missing from the project link file; run [cachet init] again")]
    MissingWorkspaceId,
}

/// Require a live, complete login session.
pub fn require_login(details: &UserDetails) -> Result<(), PreconditionError> {
    if !details.logged_in {
        return Err(PreconditionError::NotLoggedIn);
    }
    if details.expired {
        return Err(PreconditionError::LoginExpired);
    }
    if details.credentials.is_empty() {
        return Err(PreconditionError::IncompleteCredentials);
    }
    Ok(())
}

/// Require a non-empty service token. The token is injected by the
/// caller; see [`crate::token::from_env`] for the environment read.
pub fn require_service_token(token: Option<&SecretString>) -> Result<(), PreconditionError> {
    match token {
        Some(token) if !token.expose_secret().is_empty() => Ok(()),
        _ => Err(PreconditionError::MissingServiceToken),
    }
}

/// Require a readable project link with a workspace id, searching from
/// `start` upward. Returns the link so callers don't parse it twice.
pub fn require_workspace(start: &Path) -> Result<WorkspaceLink, PreconditionError> {
    let path = link::find_link_file(start).ok_or(PreconditionError::NotLinked)?;
    let workspace = link::load_from(&path).map_err(PreconditionError::UnreadableLink)?;

    if workspace.workspace_id.is_empty() {
        return Err(PreconditionError::MissingWorkspaceId);
    }
    Ok(workspace)
}
