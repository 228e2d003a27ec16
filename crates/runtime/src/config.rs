//! Runtime configuration.
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use companion_core::{CompanionConfig, SupportThresholds};

/// Tunables of the override driver, support policy and logging.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Priority support overrides are added with. Overrides are always forced.
    pub override_priority: i32,
    /// How long a dispatched host call may stay unacknowledged. `None` waits forever.
    pub ack_timeout: Option<Duration>,
    pub support: SupportThresholds,
    pub log: LogConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            override_priority: CompanionConfig::DEFAULT_OVERRIDE_PRIORITY,
            ack_timeout: None,
            support: SupportThresholds::default(),
            log: LogConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COMPANION_OVERRIDE_PRIORITY` - Override priority (default: 2)
    /// - `COMPANION_ACK_TIMEOUT_MS` - Acknowledgment timeout in ms (default: none)
    /// - `COMPANION_HEAL_RANGE` - Maximum heal distance (default: 900)
    /// - `COMPANION_LOG_DIR` - Log directory (default: platform data dir)
    /// - `COMPANION_LOG_FILTER` - `EnvFilter` directives (default: info)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(priority) = read_env::<i32>("COMPANION_OVERRIDE_PRIORITY") {
            config.override_priority = priority;
        }

        if let Some(millis) = read_env::<u64>("COMPANION_ACK_TIMEOUT_MS") {
            config.ack_timeout = (millis > 0).then(|| Duration::from_millis(millis));
        }

        if let Some(range) = read_env::<f32>("COMPANION_HEAL_RANGE") {
            config.support.heal_range = range.max(0.0);
        }

        if let Some(directory) = read_env::<PathBuf>("COMPANION_LOG_DIR") {
            config.log.directory = Some(directory);
        }

        if let Some(filter) = read_env::<String>("COMPANION_LOG_FILTER") {
            config.log.filter = filter;
        }

        config
    }

    /// Loads `path` into the process environment, then reads [`Self::from_env`].
    /// A missing file is not an error.
    pub fn from_env_file(path: &Path) -> Self {
        match dotenvy::from_path(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded environment file"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(path = %path.display(), %error, "ignoring environment file"),
        }
        Self::from_env()
    }

    pub fn with_support(mut self, support: SupportThresholds) -> Self {
        self.support = support;
        self
    }

    pub fn with_ack_timeout(mut self, timeout: Duration) -> Self {
        self.ack_timeout = Some(timeout);
        self
    }
}

/// Log file placement and filtering.
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub directory: Option<PathBuf>,
    pub filter: String,
    pub file_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filter: "info".to_string(),
            file_name: "companions.log".to_string(),
        }
    }
}

impl LogConfig {
    /// Configured directory, else the platform data directory.
    pub fn resolve_directory(&self) -> Option<PathBuf> {
        if let Some(directory) = &self.directory {
            return Some(directory.clone());
        }
        directories::ProjectDirs::from("", "", "companions").map(|dirs| dirs.data_dir().join("logs"))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
