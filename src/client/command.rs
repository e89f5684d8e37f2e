//! External command execution
//!
//! Runs a program with an argument list (never through a shell) and
//! captures both output streams. A non-zero exit is a degraded result,
//! not an error: the stderr text is logged and whatever stdout was
//! produced is returned for the caller to parse defensively.

use tokio::process::Command;

use crate::error::{GhError, Result};

/// Run a program to completion and return its captured stdout.
///
/// Only a spawn failure (program missing, not executable) is an error.
pub async fn run_command(program: &str, args: &[&str]) -> Result<String> {
    log::debug!("Running {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|source| GhError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::warn!(
            "Command `{}` failed with {}: {}",
            program,
            output.status,
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
