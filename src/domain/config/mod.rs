//! Configuration value objects

mod app_config;

pub use app_config::{AppConfig, DEFAULT_LOG_LEVEL, DEFAULT_TITLE, VALID_LOG_LEVELS};
