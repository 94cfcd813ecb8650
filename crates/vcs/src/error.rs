//! Version-control lookup errors.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// The process could not be spawned or its output not read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The process ran but exited non-zero (detached HEAD, not a repo).
    #[error("git exited with {status}: {stderr}")]
    CommandFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The process did not finish within the bounded wait.
    #[error("git did not respond within {timeout:?}")]
    TimedOut { timeout: Duration },

    /// The reported reference was not valid UTF-8.
    #[error("branch name is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, VcsError>;
