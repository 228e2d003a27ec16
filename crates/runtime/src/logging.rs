//! Log file setup.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;

/// Installs a file-backed subscriber.
///
/// The host owns stdout and stderr, so output only goes to the log file.
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let directory = config
        .resolve_directory()
        .context("no log directory configured and no platform data directory available")?;
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let file_appender = tracing_appender::rolling::never(&directory, &config.file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter {:?}", config.filter))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    tracing::info!(
        file = %directory.join(&config.file_name).display(),
        "logging initialized"
    );
    Ok(guard)
}
