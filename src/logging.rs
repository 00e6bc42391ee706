//! Log file setup. The terminal belongs to the TUI, so events only go to a file.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{GlobalConfig, LogFormat};

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "KANBAN_LOG";

pub const LOG_FILE_PREFIX: &str = "kanban.log";

/// Resolve the filter directive: env override first, then the config value
pub fn filter_directive(config: &GlobalConfig, env_override: Option<String>) -> String {
    env_override
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| config.log.level.clone())
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init(config: &GlobalConfig) -> Result<Option<WorkerGuard>> {
    if !config.log.enabled {
        return Ok(None);
    }

    let dir = config.log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    let directive = filter_directive(config, std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter {:?}", directive))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = match config.log.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(writer)
            .try_init(),
    };
    if installed.is_err() {
        // A subscriber is already set (e.g. in tests); keep using it
        return Ok(None);
    }

    Ok(Some(guard))
}
