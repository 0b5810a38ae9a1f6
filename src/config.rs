//! Runtime configuration.
//!
//! Every section deserializes with defaults, so an empty JSON object is a
//! complete configuration. Durations are expressed in whole seconds.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default inactivity threshold for the activity watchdog, in seconds.
pub const DEFAULT_INACTIVITY_THRESHOLD_SECS: u64 = 10;
/// Default retention for settled response states, in seconds.
///
/// Matches the lifetime of the platform's follow-up token.
pub const DEFAULT_STATE_GRACE_PERIOD_SECS: u64 = 15 * 60;
/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The inactivity threshold is zero.
    #[error("watchdog inactivity threshold must be greater than zero")]
    ZeroInactivityThreshold,

    /// The response state grace period is zero.
    #[error("response state grace period must be greater than zero")]
    ZeroGracePeriod,

    /// The log filter directive is blank.
    #[error("log filter must not be empty")]
    EmptyLogFilter,
}

/// Activity watchdog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    /// Seconds of inactivity before the timeout callback fires.
    pub inactivity_threshold_secs: u64,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            inactivity_threshold_secs: DEFAULT_INACTIVITY_THRESHOLD_SECS,
        }
    }
}

impl WatchdogConfig {
    /// Returns the inactivity threshold.
    #[must_use]
    pub const fn inactivity_threshold(&self) -> Duration {
        Duration::from_secs(self.inactivity_threshold_secs)
    }
}

/// Response lifecycle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Seconds a response state is retained before it may be swept.
    pub state_grace_period_secs: u64,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            state_grace_period_secs: DEFAULT_STATE_GRACE_PERIOD_SECS,
        }
    }
}

impl ResponseConfig {
    /// Returns the grace period.
    #[must_use]
    pub const fn state_grace_period(&self) -> Duration {
        Duration::from_secs(self.state_grace_period_secs)
    }
}

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
    /// Human-readable single line output.
    #[default]
    Compact,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Output format.
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

impl TelemetryConfig {
    /// Returns the filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchyardConfig {
    /// Activity watchdog settings.
    pub watchdog: WatchdogConfig,
    /// Response lifecycle settings.
    pub response: ResponseConfig,
    /// Logging settings.
    pub telemetry: TelemetryConfig,
}

impl SwitchyardConfig {
    /// Parses and validates a JSON document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document is not valid JSON for this
    /// shape or a value fails validation.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that durations are non-zero and the filter is present.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.watchdog.inactivity_threshold_secs == 0 {
            return Err(ConfigError::ZeroInactivityThreshold);
        }
        if self.response.state_grace_period_secs == 0 {
            return Err(ConfigError::ZeroGracePeriod);
        }
        if self.telemetry.log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }

    /// Creates a configuration for game-style threads that archive quickly.
    ///
    /// Threads close after one minute of silence; response states are kept
    /// for the default grace period.
    #[must_use]
    pub fn quick_archive() -> Self {
        Self {
            watchdog: WatchdogConfig {
                inactivity_threshold_secs: 60,
            },
            ..Self::default()
        }
    }

    /// Creates a configuration with verbose JSON logging.
    ///
    /// Useful when shipping logs to an aggregation stack.
    #[must_use]
    pub fn verbose_json() -> Self {
        Self {
            telemetry: TelemetryConfig {
                log_filter: "switchyard=debug,info".to_owned(),
                log_format: LogFormat::Json,
            },
            ..Self::default()
        }
    }
}
