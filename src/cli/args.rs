//! CLI argument definitions using Clap

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::notification::{NotificationId, RepeatInterval};

/// local-notify - show, schedule and cancel local notifications
#[derive(Parser, Debug)]
#[command(name = "local-notify")]
#[command(version)]
#[command(about = "Show, schedule and cancel local notifications through the macOS notification center")]
#[command(long_about = None)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a notification now or schedule it for later
    Show(ShowArgs),
    /// Cancel a scheduled or delivered notification
    Cancel {
        /// Notification id
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    /// List scheduled and delivered notifications
    List {
        /// Only list notifications waiting for delivery
        #[arg(long, conflicts_with = "delivered")]
        scheduled: bool,
        /// Only list delivered notifications
        #[arg(long)]
        delivered: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments of the show subcommand
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Notification body
    pub body: String,

    /// Notification title (defaults to the configured title)
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Identifier used to cancel the notification later
    #[arg(short = 'i', long, default_value_t = 0, allow_negative_numbers = true)]
    pub id: i32,

    /// Deliver at an absolute time (RFC 3339, or local "YYYY-MM-DD HH:MM")
    #[arg(long, value_name = "TIME", conflicts_with = "delay")]
    pub at: Option<String>,

    /// Deliver after a delay (e.g., 30s, 5m, 1h30m)
    #[arg(long = "in", value_name = "DELAY")]
    pub delay: Option<String>,

    /// Repeat the notification at this interval
    #[arg(short = 'r', long, value_name = "INTERVAL")]
    pub repeat: Option<RepeatArg>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Repeat interval argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RepeatArg {
    #[value(name = "none")]
    Never,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl From<RepeatArg> for RepeatInterval {
    fn from(arg: RepeatArg) -> Self {
        match arg {
            RepeatArg::Never => RepeatInterval::Never,
            RepeatArg::Year => RepeatInterval::Year,
            RepeatArg::Month => RepeatInterval::Month,
            RepeatArg::Day => RepeatInterval::Day,
            RepeatArg::Hour => RepeatInterval::Hour,
            RepeatArg::Minute => RepeatInterval::Minute,
            RepeatArg::Second => RepeatInterval::Second,
        }
    }
}

/// Resolved show options, after merging with config
#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub title: String,
    pub body: String,
    pub id: NotificationId,
    /// `None` means as soon as possible
    pub deliver_at: Option<DateTime<Utc>>,
    pub repeat: RepeatInterval,
}

/// Which collections `list` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub scheduled: bool,
    pub delivered: bool,
    pub json: bool,
}

impl ListOptions {
    /// Both collections are shown unless one was asked for explicitly
    pub fn from_flags(scheduled: bool, delivered: bool, json: bool) -> Self {
        let both = !scheduled && !delivered;
        Self {
            scheduled: scheduled || both,
            delivered: delivered || both,
            json,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["title", "repeat", "log_level"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn show_args(argv: &[&str]) -> ShowArgs {
        match Cli::parse_from(argv).command {
            Commands::Show(args) => args,
            other => panic!("Expected Show command, got {:?}", other),
        }
    }

    #[test]
    fn show_parses_defaults() {
        let args = show_args(&["local-notify", "show", "hello"]);
        assert_eq!(args.body, "hello");
        assert!(args.title.is_none());
        assert_eq!(args.id, 0);
        assert!(args.at.is_none());
        assert!(args.delay.is_none());
        assert!(args.repeat.is_none());
    }

    #[test]
    fn show_parses_schedule() {
        let args = show_args(&[
            "local-notify",
            "show",
            "Drink water",
            "-t",
            "Break",
            "-i",
            "5",
            "--in",
            "1h",
            "-r",
            "hour",
        ]);
        assert_eq!(args.title, Some("Break".to_string()));
        assert_eq!(args.id, 5);
        assert_eq!(args.delay, Some("1h".to_string()));
        assert_eq!(args.repeat, Some(RepeatArg::Hour));
    }

    #[test]
    fn show_rejects_at_with_in() {
        let result = Cli::try_parse_from([
            "local-notify", "show", "b", "--at", "2026-10-16 10:00", "--in", "5m",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn show_parses_repeat_none() {
        let args = show_args(&["local-notify", "show", "b", "--repeat", "none"]);
        assert_eq!(args.repeat, Some(RepeatArg::Never));
    }

    #[test]
    fn cancel_parses_negative_id() {
        let cli = Cli::parse_from(["local-notify", "cancel", "-3"]);
        assert!(matches!(cli.command, Commands::Cancel { id: -3 }));
    }

    #[test]
    fn list_flags_default_to_both() {
        let options = ListOptions::from_flags(false, false, false);
        assert!(options.scheduled && options.delivered);

        let options = ListOptions::from_flags(false, true, true);
        assert!(!options.scheduled && options.delivered && options.json);
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["local-notify", "config", "set", "repeat", "day"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "repeat");
            assert_eq!(value, "day");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["local-notify", "list", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn repeat_arg_converts_to_interval() {
        assert_eq!(RepeatInterval::from(RepeatArg::Never), RepeatInterval::Never);
        assert_eq!(RepeatInterval::from(RepeatArg::Minute), RepeatInterval::Minute);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("title"));
        assert!(is_valid_config_key("repeat"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
