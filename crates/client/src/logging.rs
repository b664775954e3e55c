//! File-only tracing setup. Stdout belongs to the game text.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

const LOG_FILE: &str = "client.log";

/// Installs the global subscriber and returns the session log file path.
pub fn setup_logging(config: &CliConfig) -> Result<PathBuf> {
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir(config).join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("failed to create log directory {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    // Leak the guard to keep the file writer alive for the whole process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join(LOG_FILE);
    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("log file: {}", log_file.display());

    Ok(log_file)
}

/// Platform log root, e.g. `~/.cache/cave/logs` on Linux.
pub fn log_dir(config: &CliConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }

    directories::ProjectDirs::from("", "", "cave")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("cave"))
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_dir_wins() {
        let config = CliConfig {
            log_dir: Some(PathBuf::from("/var/tmp/cave-logs")),
            ..CliConfig::default()
        };
        assert_eq!(log_dir(&config), PathBuf::from("/var/tmp/cave-logs"));
    }

    #[test]
    fn platform_log_dir_ends_in_logs() {
        assert!(log_dir(&CliConfig::default()).ends_with("logs"));
    }
}
