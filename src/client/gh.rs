//! GitHub CLI client implementation

use async_trait::async_trait;
use tokio::process::Command;

use super::GitHubCli;
use super::command::run_command;
use crate::error::{GhError, Result};

/// The external program name
const GH_PROGRAM: &str = "gh";

/// Field list requested from `gh repo view`.
///
/// Fixed and explicit: the flattened keys of these fields become the output
/// columns, so the set is part of the tool's contract.
pub const REPO_VIEW_FIELDS: &str = "codeOfConduct,contactLinks,createdAt,defaultBranchRef,\
deleteBranchOnMerge,description,diskUsage,forkCount,hasDiscussionsEnabled,hasIssuesEnabled,\
hasProjectsEnabled,hasWikiEnabled,homepageUrl,id,isArchived,isBlankIssuesEnabled,isEmpty,\
isFork,isInOrganization,isMirror,isPrivate,isSecurityPolicyEnabled,isTemplate,\
isUserConfigurationRepository,issueTemplates,issues,languages,latestRelease,licenseInfo,\
mergeCommitAllowed,milestones,mirrorUrl,name,nameWithOwner,openGraphImageUrl,owner,parent,\
primaryLanguage,projects,pullRequestTemplates,pullRequests,pushedAt,rebaseMergeAllowed,\
repositoryTopics,securityPolicyUrl,squashMergeAllowed,sshUrl,stargazerCount,\
templateRepository,updatedAt,url,usesCustomOpenGraphImage,visibility";

/// Checks that the GitHub CLI is installed and runnable
pub async fn check_gh_available() -> Result<()> {
    let output = Command::new(GH_PROGRAM)
        .arg("--version")
        .output()
        .await
        .map_err(|source| GhError::Spawn {
            program: GH_PROGRAM.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(GhError::Unavailable(output.status.to_string()).into());
    }

    let version = String::from_utf8_lossy(&output.stdout);
    log::debug!(
        "GitHub CLI available: {}",
        version.lines().next().unwrap_or("").trim()
    );

    Ok(())
}

/// Client that shells out to the GitHub CLI
#[derive(Debug, Default)]
pub struct GhClient;

impl GhClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GitHubCli for GhClient {
    async fn list_repos(&self, org: &str, limit: usize) -> Result<String> {
        let limit = limit.to_string();
        run_command(
            GH_PROGRAM,
            &[
                "repo",
                "list",
                org,
                "--limit",
                &limit,
                "--json",
                "nameWithOwner",
            ],
        )
        .await
    }

    async fn view_repo(&self, name_with_owner: &str) -> Result<String> {
        run_command(
            GH_PROGRAM,
            &["repo", "view", name_with_owner, "--json", REPO_VIEW_FIELDS],
        )
        .await
    }
}
