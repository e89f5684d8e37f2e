//! Repository listing with cache-or-fetch resolution

use crate::cache::ListingCache;
use crate::client::{GitHubCli, RepoRef};
use crate::error::{GhError, Result};

/// Obtain the repository references for an organization.
///
/// The cache file for (organization, limit) is used verbatim when present,
/// unless `no_cache` is set. A fresh response is written back to the cache
/// before parsing, so a malformed response is cached too — matching the
/// observed contract. Malformed listing JSON is fatal.
pub async fn list_repos(
    client: &dyn GitHubCli,
    cache: &ListingCache,
    org: &str,
    limit: usize,
    no_cache: bool,
) -> Result<Vec<RepoRef>> {
    let cached = if no_cache {
        None
    } else {
        cache.load(org, limit)?
    };

    let raw = match cached {
        Some(raw) => raw,
        None => {
            let raw = client.list_repos(org, limit).await?;
            cache.store(org, limit, &raw)?;
            raw
        }
    };

    let repos: Vec<RepoRef> =
        serde_json::from_str(&raw).map_err(|source| GhError::ListingDecode {
            org: org.to_string(),
            source,
        })?;

    let repos: Vec<RepoRef> = repos
        .into_iter()
        .filter(|repo| !repo.name_with_owner.is_empty())
        .collect();

    log::debug!("Resolved {} repositories for {}", repos.len(), org);
    Ok(repos)
}
