//! Mock GitHub CLI client for testing
//!
//! Returns canned raw-text responses without spawning processes, and
//! counts calls so tests can assert which external commands would have
//! run.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::GitHubCli;
use crate::error::Result;

/// Canned-response client.
///
/// Configure responses via the builder methods, then assert on
/// [`MockGitHubCli::calls`]. Unconfigured requests return empty text, the
/// same shape a failed external command produces.
pub struct MockGitHubCli {
    listing: Option<String>,
    views: HashMap<String, String>,
    calls: Mutex<CallCounts>,
}

/// Tracks client call counts for test verification
#[derive(Debug, Default, Clone)]
pub struct CallCounts {
    pub list_repos: usize,
    pub view_repo: usize,
}

impl MockGitHubCli {
    pub fn new() -> Self {
        Self {
            listing: None,
            views: HashMap::new(),
            calls: Mutex::new(CallCounts::default()),
        }
    }

    /// Set the raw text returned by `list_repos`
    pub fn with_listing(mut self, raw: impl Into<String>) -> Self {
        self.listing = Some(raw.into());
        self
    }

    /// Set the raw text returned by `view_repo` for one repository
    pub fn with_view(mut self, name_with_owner: impl Into<String>, raw: impl Into<String>) -> Self {
        self.views.insert(name_with_owner.into(), raw.into());
        self
    }

    /// Snapshot of the calls made so far
    pub fn calls(&self) -> CallCounts {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockGitHubCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitHubCli for MockGitHubCli {
    async fn list_repos(&self, _org: &str, _limit: usize) -> Result<String> {
        self.calls.lock().unwrap().list_repos += 1;
        Ok(self.listing.clone().unwrap_or_default())
    }

    async fn view_repo(&self, name_with_owner: &str) -> Result<String> {
        self.calls.lock().unwrap().view_repo += 1;
        Ok(self.views.get(name_with_owner).cloned().unwrap_or_default())
    }
}
