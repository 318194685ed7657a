//! local-notify - local notifications through the macOS notification center
//!
//! Shows a notification immediately, schedules one for a later time with an
//! optional repeat interval, and cancels either kind by identifier.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Identifiers, repeat intervals, recurrence descriptors and requests
//! - **Application**: The notification adapter and its port interfaces (traits)
//! - **Infrastructure**: The native macOS center, an in-memory center and config storage
//! - **CLI**: Command-line interface, argument parsing and output formatting
//!
//! # Example
//!
//! ```
//! use local_notify::application::LocalNotifications;
//! use local_notify::domain::NotificationId;
//! use local_notify::infrastructure::InMemoryNotificationCenter;
//!
//! let notifications = LocalNotifications::new(InMemoryNotificationCenter::new());
//! notifications.show("Build finished", "All tests passed", NotificationId::new(1));
//! notifications.cancel(NotificationId::new(1));
//! assert!(notifications.scheduled().is_empty());
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
