//! On-disk cache for repository listing responses
//!
//! Stores the raw text of one listing response per (organization, limit)
//! pair. Entries never expire; delete the file to force a refresh.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File-backed cache of raw listing responses
pub struct ListingCache {
    dir: PathBuf,
}

impl ListingCache {
    /// Create a cache rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache file path for one (organization, limit) pair
    pub fn path_for(&self, org: &str, limit: usize) -> PathBuf {
        self.dir.join(format!("repo_list_cache_{org}_{limit}.json"))
    }

    /// Read the cached raw listing text, if present
    pub fn load(&self, org: &str, limit: usize) -> Result<Option<String>> {
        let path = self.path_for(org, limit);
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&path)?;
        log::debug!("Using cached repository list at {}", path.display());
        Ok(Some(raw))
    }

    /// Persist raw listing text for later runs
    pub fn store(&self, org: &str, limit: usize, raw: &str) -> Result<()> {
        ensure_dir(&self.dir)?;
        let path = self.path_for(org, limit);
        std::fs::write(&path, raw)?;
        log::debug!("Cached repository list to {}", path.display());
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
}
