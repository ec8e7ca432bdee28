use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging;

/// Longest delay the front end will accept for any pacing timer.
const MAX_DELAY_MS: u64 = 60_000;

/// Turn pacing for the terminal front end. None of it touches game state.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause between the human's move and the computer's reply.
    pub computer_delay_ms: u64,
    /// Pause between a win and the board being cleared.
    pub reset_delay_ms: u64,
    /// How long a notification stays on screen.
    pub notification_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            computer_delay_ms: 500,
            reset_delay_ms: 3000,
            notification_ms: 3000,
        }
    }
}

impl PacingConfig {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn notification(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Seed for the random fallback move. Unset means OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `cpu_connect_four=debug`.
    pub level: String,
    /// Log destination; the terminal itself is taken by the UI.
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: PathBuf::from("connect_four.log"),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pacing: PacingConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            // Runs before the log subscriber exists, so this goes to stderr.
            eprintln!(
                "Config file {} not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pacing.notification_ms == 0 {
            return Err(ConfigError::Validation(
                "pacing.notification_ms must be > 0".into(),
            ));
        }
        if self.pacing.computer_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "pacing.computer_delay_ms must be <= {MAX_DELAY_MS}"
            )));
        }
        if self.pacing.reset_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "pacing.reset_delay_ms must be <= {MAX_DELAY_MS}"
            )));
        }
        if self.pacing.notification_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "pacing.notification_ms must be <= {MAX_DELAY_MS}"
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".into(),
            ));
        }
        logging::build_filter(&self.logging.level)
            .map_err(|e| ConfigError::Validation(format!("logging.level: {e}")))?;
        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
