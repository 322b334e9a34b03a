//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over `--log-level`. One-shot commands log to stderr so
//! stdout stays clean for `--format json`; the TUI logs to a file because
//! stderr is covered by the alternate screen.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

use crate::args::LogLevel;

pub const LOG_FILE_NAME: &str = "chipchip.log";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn file_in(data_dir: &Path) -> Self {
        LogTarget::File(data_dir.join(LOG_FILE_NAME))
    }
}

fn make_env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = make_env_filter(level);

    let result = match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            tracing::subscriber::set_global_default(
                tracing_subscriber::Registry::default().with(filter).with(layer),
            )
        }
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false);
            tracing::subscriber::set_global_default(
                tracing_subscriber::Registry::default().with(filter).with(layer),
            )
        }
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_is_created_under_data_dir() -> Result<()> {
        let dir = TempDir::new()?;
        let LogTarget::File(path) = LogTarget::file_in(&dir.path().join("nested")) else {
            panic!("expected file target");
        };

        open_log_file(&path)?;
        assert!(path.exists());
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
        Ok(())
    }
}
