//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the native
//! notification center, its in-memory stand-in, and config file storage.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
#[cfg(target_os = "macos")]
pub use notification::MacNotificationCenter;
pub use notification::{
    create_notification_center, is_native_center_available, InMemoryNotificationCenter,
};
