//! Branch lookup backed by the `git` executable.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use {tokio::process::Command, tracing::debug};

use crate::{
    BranchSource,
    error::{Result, VcsError},
};

/// Upper bound on how long a single git invocation may run.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// [`BranchSource`] that shells out to `git symbolic-ref --short HEAD`.
///
/// Only standard output is read; a non-zero exit, an I/O failure, or an
/// expired wait all surface as errors rather than a fallback branch
/// name.
pub struct GitCli {
    timeout: Duration,
    work_dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            work_dir: None,
        }
    }

    /// Run git inside `dir` instead of the process working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(dir.into()),
            ..Self::new()
        }
    }

    /// Override the bounded wait.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BranchSource for GitCli {
    async fn current_branch(&self) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.args(["symbolic-ref", "--short", "HEAD"]);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| VcsError::TimedOut {
                timeout: self.timeout,
            })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(VcsError::CommandFailed {
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        let branch = leaf_name(stdout.trim());
        debug!(branch = %branch, "resolved current branch");
        Ok(branch.to_string())
    }
}

/// Last `/`-separated component of a ref; namespaced branches such as
/// `feature/foo` report `foo`.
fn leaf_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
