//! CLI presenter for output formatting

use chrono::Local;
use colored::*;

use crate::domain::notification::NotificationRequest;

/// Presenter for CLI output formatting
#[derive(Debug, Default, Clone, Copy)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print a section heading for a notification listing
    pub fn heading(&self, title: &str, count: usize) {
        println!("{} ({})", title.bold(), count);
    }

    /// Print one notification row
    pub fn notification(&self, request: &NotificationRequest) {
        println!("  {}", self.format_notification(request));
    }

    /// Format a notification as `#id  when  [every unit]  title: body`
    pub fn format_notification(&self, request: &NotificationRequest) -> String {
        let when = request
            .deliver_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S");
        let repeat = request.repeat_interval();
        let every = if repeat.is_recurring() {
            format!("  every {}", repeat)
        } else {
            String::new()
        };

        format!(
            "#{:<5} {}{}  {}: {}",
            request.id.value(),
            when,
            every.as_str().yellow(),
            request.title.as_str().bold(),
            request.body
        )
    }
}
