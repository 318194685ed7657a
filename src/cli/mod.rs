//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting and the command handlers.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod notify_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ListOptions, ShowArgs, ShowOptions};
pub use presenter::Presenter;
