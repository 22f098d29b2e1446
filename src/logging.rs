//! File logging for the terminal binary.
//!
//! The game owns the terminal in raw mode, so log records cannot go to
//! stderr. They are appended to a file instead, and only when a path is
//! given; otherwise the `log` macros stay no-ops.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const LOG_PATH_ENV: &str = "PACMAN_LOG_PATH";
pub const LOG_LEVEL_ENV: &str = "PACMAN_LOG";

/// Log destination: the CLI path if given, else `PACMAN_LOG_PATH`.
pub fn resolve_log_path(cli: Option<&Path>) -> Option<PathBuf> {
    cli.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(LOG_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Install the global logger writing to `path`. Level comes from
/// `PACMAN_LOG` (env_logger filter syntax), default `info`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;

    log::info!("logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_path_wins() {
        let path = resolve_log_path(Some(Path::new("cli.log")));
        assert_eq!(path, Some(PathBuf::from("cli.log")));
    }

    #[test]
    fn no_path_is_a_no_op() {
        assert!(init(None).is_ok());
    }
}
