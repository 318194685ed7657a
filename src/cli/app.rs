//! App runner: configuration, logging and command dispatch

use std::env;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::application::LocalNotifications;
use crate::domain::config::AppConfig;
use crate::domain::notification::{NotificationId, RepeatInterval};
use crate::domain::schedule::{parse_delivery_time, Delay};
use crate::infrastructure::{
    create_notification_center, is_native_center_available, XdgConfigStore,
};

use super::args::{Commands, ListOptions, ShowArgs, ShowOptions};
use super::config_cmd::handle_config_command;
use super::notify_cmd::{handle_cancel, handle_list, handle_show};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the configured title
pub const ENV_TITLE: &str = "LOCAL_NOTIFY_TITLE";

/// Environment variable overriding the configured repeat interval
pub const ENV_REPEAT: &str = "LOCAL_NOTIFY_REPEAT";

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over `--verbose`, which wins over the configured level.
pub fn init_logging(verbose: bool, config: &AppConfig) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level_or_default()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("local_notify={}", level)));

    // A second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load and merge configuration from file and env
pub async fn load_merged_config(store: &impl ConfigStore) -> AppConfig {
    let file_config = store.load().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config file");
        AppConfig::empty()
    });

    let env_config = AppConfig {
        title: env::var(ENV_TITLE).ok().filter(|s| !s.is_empty()),
        repeat: env::var(ENV_REPEAT).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env (CLI flags are applied per command)
    AppConfig::defaults().merge(file_config).merge(env_config)
}

/// Combine show arguments with config, parsing times relative to `now`
pub fn resolve_show_options(
    args: ShowArgs,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Result<ShowOptions, String> {
    let deliver_at = match (args.at.as_deref(), args.delay.as_deref()) {
        (Some(at), _) => Some(parse_delivery_time(at).map_err(|e| e.to_string())?),
        (None, Some(delay)) => Some(
            delay
                .parse::<Delay>()
                .map_err(|e| e.to_string())?
                .after(now),
        ),
        (None, None) => None,
    };

    let repeat = args
        .repeat
        .map(RepeatInterval::from)
        .unwrap_or_else(|| config.repeat_or_default());

    Ok(ShowOptions {
        title: args
            .title
            .unwrap_or_else(|| config.title_or_default().to_string()),
        body: args.body,
        id: NotificationId::new(args.id),
        deliver_at,
        repeat,
    })
}

/// Run a parsed command
pub async fn run(command: Commands, verbose: bool) -> ExitCode {
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    let command = match command {
        Commands::Config { action } => {
            init_logging(verbose, &AppConfig::empty());
            return match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            };
        }
        other => other,
    };

    let config = load_merged_config(&store).await;
    init_logging(verbose, &config);

    if !is_native_center_available() {
        presenter.warn(
            "No native notification center on this platform; notifications are kept in memory until this process exits",
        );
    }

    let notifications = LocalNotifications::new(create_notification_center());

    match command {
        Commands::Show(args) => match resolve_show_options(args, &config, Utc::now()) {
            Ok(options) => {
                handle_show(options, &notifications, &presenter);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e);
                ExitCode::from(EXIT_USAGE_ERROR)
            }
        },
        Commands::Cancel { id } => {
            handle_cancel(NotificationId::new(id), &notifications, &presenter);
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::List {
            scheduled,
            delivered,
            json,
        } => {
            let options = ListOptions::from_flags(scheduled, delivered, json);
            match handle_list(options, &notifications, &presenter) {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&format!("Failed to render listing: {}", e));
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}
