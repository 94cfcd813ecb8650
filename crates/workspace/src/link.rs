//! The project link file connecting a local directory to a workspace.
//!
//! `cachet init` writes `.cachet.json` at the project root. Commands run
//! from anywhere inside the project, so discovery walks from the working
//! directory up through its ancestors.

use std::path::{Path, PathBuf};

use {serde::Deserialize, tracing::debug};

use crate::error::{Error, Result};

/// File name of the project link at the project root.
pub const LINK_FILE: &str = ".cachet.json";

/// Contents of a project link file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceLink {
    /// Identifier of the workspace this project belongs to.
    #[serde(default)]
    pub workspace_id: String,
    /// Environment commands default to when none is passed.
    #[serde(default)]
    pub default_environment: Option<String>,
}

/// Find the nearest link file at or above `start`.
pub fn find_link_file(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(LINK_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found project link file");
            return Some(candidate);
        }
    }
    None
}

/// Read a link file from an explicit path.
pub fn load_from(path: &Path) -> Result<WorkspaceLink> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| Error::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
