//! GitHub CLI client

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

pub mod command;
pub mod gh;
#[cfg(test)]
pub mod mock;

pub use gh::{GhClient, check_gh_available};
#[cfg(test)]
pub use mock::MockGitHubCli;

/// Interface to the hosting provider's command-line client.
///
/// Both operations return the raw JSON text the external command produced.
/// Callers own parsing, which lets the listing cache store responses
/// verbatim.
#[async_trait]
pub trait GitHubCli: Send + Sync {
    /// List repositories in an organization as raw JSON text
    async fn list_repos(&self, org: &str, limit: usize) -> Result<String>;

    /// Fetch one repository's metadata as raw JSON text
    async fn view_repo(&self, name_with_owner: &str) -> Result<String>;
}

/// A repository reference from the listing response
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRef {
    /// Owner-qualified repository name
    #[serde(rename = "nameWithOwner", default)]
    pub name_with_owner: String,
}
