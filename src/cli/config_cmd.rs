//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, VALID_LOG_LEVELS};
use crate::domain::error::ConfigError;
use crate::domain::notification::RepeatInterval;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;
    let value = validate_config_value(key, value)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value.clone());

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;
    presenter.output(get_value(&config, key).unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, get_value(&config, key).unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a value for `key` and return its canonical form
fn validate_config_value(key: &str, value: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "title" => {
            let title = value.trim();
            if title.is_empty() {
                return Err(invalid("Title must not be empty".to_string()));
            }
            Ok(title.to_string())
        }
        "repeat" => value
            .parse::<RepeatInterval>()
            .map(|interval| interval.to_string())
            .map_err(|e| invalid(e.to_string())),
        "log_level" => {
            let level = value.trim().to_lowercase();
            if !VALID_LOG_LEVELS.contains(&level.as_str()) {
                return Err(invalid(format!(
                    "Invalid log level. Valid levels: {}",
                    VALID_LOG_LEVELS.join(", ")
                )));
            }
            Ok(level)
        }
        _ => Ok(value.to_string()),
    }
}

fn set_value(config: &mut AppConfig, key: &str, value: String) {
    match key {
        "title" => config.title = Some(value),
        "repeat" => config.repeat = Some(value),
        "log_level" => config.log_level = Some(value),
        _ => unreachable!(), // Already validated
    }
}

fn get_value<'a>(config: &'a AppConfig, key: &str) -> Option<&'a str> {
    match key {
        "title" => config.title.as_deref(),
        "repeat" => config.repeat.as_deref(),
        "log_level" => config.log_level.as_deref(),
        _ => None,
    }
}
