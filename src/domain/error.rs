//! Domain error types

use thiserror::Error;

/// Error when parsing a relative delay string
#[derive(Debug, Clone, Error)]
#[error("Invalid delay format: \"{input}\". Expected format: <number>h, <number>m, <number>s or a combination (e.g., 30s, 5m, 1h30m)")]
pub struct DelayParseError {
    pub input: String,
}

/// Error when an unknown repeat interval is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid repeat interval: \"{input}\". Valid intervals are: none, year, month, day, hour, minute, second")]
pub struct InvalidRepeatIntervalError {
    pub input: String,
}

/// Error when a notification identifier is not an integer
#[derive(Debug, Clone, Error)]
#[error("Invalid notification id: \"{input}\". Expected an integer")]
pub struct InvalidNotificationIdError {
    pub input: String,
}

/// Error when an absolute delivery time cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid delivery time: \"{input}\". Expected RFC 3339 (e.g., 2026-10-16T09:30:00+02:00) or local \"YYYY-MM-DD HH:MM[:SS]\"")]
pub struct DeliveryTimeParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
