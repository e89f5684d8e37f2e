//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Export GitHub organization repository metadata to CSV
#[derive(Parser, Debug)]
#[command(name = "repodump")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name of the GitHub organization
    pub organization: String,

    /// Maximum number of repositories to fetch
    #[arg(long, env = "REPODUMP_LIMIT", hide_env = true)]
    pub limit: Option<usize>,

    /// Output format (csv, table, json)
    #[arg(long, env = "REPODUMP_FORMAT", hide_env = true, hide_possible_values = true)]
    pub format: Option<OutputFormat>,

    /// Output file path, csv format only (defaults to repo_details_{organization}.csv)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory for repository list cache files (defaults to the current directory)
    #[arg(long, env = "REPODUMP_CACHE_DIR", hide_env = true)]
    pub cache_dir: Option<PathBuf>,

    /// Bypass the listing cache, fetch fresh data from the GitHub CLI
    #[arg(long, env = "REPODUMP_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// Override config file location
    #[arg(long, env = "REPODUMP_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, env = "REPODUMP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Output format options
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV file named after the organization (default)
    #[default]
    Csv,
    /// Terminal table on stdout
    Table,
    /// JSON document on stdout
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verifies() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_organization_is_required() {
        let result = Cli::try_parse_from(["repodump"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_limit_defaults_to_unset() {
        let cli = Cli::try_parse_from(["repodump", "acme"]).unwrap();
        assert_eq!(cli.limit, None);
        assert_eq!(cli.format, None);
        assert!(!cli.no_cache);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "repodump",
            "acme",
            "--limit",
            "50",
            "--format",
            "table",
            "--no-cache",
        ])
        .unwrap();
        assert_eq!(cli.organization, "acme");
        assert_eq!(cli.limit, Some(50));
        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.no_cache);
    }

    #[test]
    fn test_format_round_trips_through_yaml() {
        let format: OutputFormat = serde_yaml::from_str("json").unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(serde_yaml::to_string(&OutputFormat::Csv).unwrap().trim(), "csv");
    }
}
