//! Application layer - Use cases and port interfaces
//!
//! Contains the notification adapter and the trait definitions
//! for external system interactions.

pub mod notifications;
pub mod ports;

// Re-export use cases
pub use notifications::LocalNotifications;
