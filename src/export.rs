//! Export driver
//!
//! Resolves effective settings, lists the organization's repositories,
//! then walks them sequentially: view, parse, flatten, write. One failed
//! repository skips one row; a failed listing ends the run.

use std::fs::File;
use std::path::PathBuf;

use colored::Colorize;
use serde_json::{Map, Value};

use crate::cache::ListingCache;
use crate::cli::{Cli, OutputFormat};
use crate::client::{GhClient, GitHubCli, RepoRef, check_gh_available};
use crate::config::Config;
use crate::error::Result;
use crate::flatten::flatten;
use crate::listing;
use crate::output::{CsvSink, json, table};

/// Effective settings after merging CLI flags and the config file
#[derive(Debug)]
struct Settings {
    limit: usize,
    format: OutputFormat,
    cache_dir: PathBuf,
    output: PathBuf,
}

/// Flags win over the config file, which wins over defaults.
fn resolve(cli: &Cli, config: &Config) -> Settings {
    Settings {
        limit: cli.limit.unwrap_or(config.preferences.limit),
        format: cli.format.or(config.preferences.format).unwrap_or_default(),
        cache_dir: cli
            .cache_dir
            .clone()
            .or_else(|| config.preferences.cache_dir.clone())
            .unwrap_or_else(|| PathBuf::from(".")),
        output: cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("repo_details_{}.csv", cli.organization))),
    }
}

/// Run the export for a parsed CLI invocation
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let settings = resolve(&cli, &config);

    check_gh_available().await?;

    let client = GhClient::new();
    let cache = ListingCache::new(&settings.cache_dir);
    let repos = listing::list_repos(
        &client,
        &cache,
        &cli.organization,
        settings.limit,
        cli.no_cache,
    )
    .await?;

    match settings.format {
        OutputFormat::Csv => {
            // The file is created before the first fetch, so a run with no
            // successful records still leaves an empty file behind.
            let file = File::create(&settings.output)?;
            let mut sink = CsvSink::new(file);
            let mut rows = 0usize;
            fetch_each(&client, &repos, |record| {
                sink.write_record(&record)?;
                rows += 1;
                Ok(())
            })
            .await?;
            sink.finish()?;

            println!(
                "{} Wrote {} rows to {}",
                "✓".green(),
                rows,
                settings.output.display()
            );
        }
        OutputFormat::Table => {
            let records = fetch_all(&client, &repos).await?;
            println!("{}", table::format_table(&records));
        }
        OutputFormat::Json => {
            let records = fetch_all(&client, &repos).await?;
            println!("{}", json::format_json(&records)?);
        }
    }

    Ok(())
}

/// Fetch and flatten each repository's details in listing order.
///
/// A detail response that fails to parse is logged and skipped; the loop
/// continues with the next repository.
async fn fetch_each<F>(client: &dyn GitHubCli, repos: &[RepoRef], mut on_record: F) -> Result<()>
where
    F: FnMut(Map<String, Value>) -> Result<()>,
{
    for repo in repos {
        eprintln!("Fetching details for {}...", repo.name_with_owner);
        let raw = client.view_repo(&repo.name_with_owner).await?;

        match serde_json::from_str::<Map<String, Value>>(&raw) {
            Ok(detail) => on_record(flatten(&detail))?,
            Err(err) => log::warn!(
                "Failed to decode details for {}: {}",
                repo.name_with_owner,
                err
            ),
        }
    }

    Ok(())
}

async fn fetch_all(client: &dyn GitHubCli, repos: &[RepoRef]) -> Result<Vec<Map<String, Value>>> {
    let mut records = Vec::with_capacity(repos.len());
    fetch_each(client, repos, |record| {
        records.push(record);
        Ok(())
    })
    .await?;
    Ok(records)
}
