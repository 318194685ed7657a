//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::RepeatInterval;

/// Title used when neither the command line nor the config provides one
pub const DEFAULT_TITLE: &str = "Notification";

/// Log level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `log_level`
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default notification title
    pub title: Option<String>,
    /// Default repeat interval for scheduled notifications
    pub repeat: Option<String>,
    /// Log verbosity for diagnostics on stderr
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            title: Some(DEFAULT_TITLE.to_string()),
            repeat: Some(RepeatInterval::Never.to_string()),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            title: other.title.or(self.title),
            repeat: other.repeat.or(self.repeat),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Get title, or the built-in default if not set
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Get repeat as parsed RepeatInterval, or Never if not set/invalid
    pub fn repeat_or_default(&self) -> RepeatInterval {
        self.repeat
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get log level, or "warn" if not set/invalid
    pub fn log_level_or_default(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|level| VALID_LOG_LEVELS.contains(level))
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
