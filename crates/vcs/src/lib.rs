//! Current-branch lookup through an external version-control tool.
//!
//! The capability is a narrow trait so command logic can take any
//! [`BranchSource`] and tests can substitute a double for the real
//! [`GitCli`] process invocation.

pub mod error;
pub mod git;

pub use {
    error::{Result, VcsError},
    git::GitCli,
};

/// Something that can report the branch the working directory is on.
#[async_trait::async_trait]
pub trait BranchSource: Send + Sync {
    async fn current_branch(&self) -> Result<String>;
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBranch(&'static str);

    #[async_trait::async_trait]
    impl BranchSource for FixedBranch {
        async fn current_branch(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    async fn branch_label(source: &dyn BranchSource) -> String {
        match source.current_branch().await {
            Ok(branch) => branch,
            Err(_) => "unknown".to_string(),
        }
    }

    #[tokio::test]
    async fn trait_objects_are_substitutable() {
        let label = branch_label(&FixedBranch("staging")).await;
        assert_eq!(label, "staging");
    }
}
