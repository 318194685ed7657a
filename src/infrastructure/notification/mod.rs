//! Notification center adapters
//!
//! The native center is only available on macOS. Other targets get the
//! in-memory center, which lives and dies with the process.

mod in_memory;
#[cfg(target_os = "macos")]
mod macos;

pub use in_memory::InMemoryNotificationCenter;
#[cfg(target_os = "macos")]
pub use macos::MacNotificationCenter;

use crate::application::ports::NotificationCenter;

/// Create the notification center for the current platform
pub fn create_notification_center() -> Box<dyn NotificationCenter> {
    #[cfg(target_os = "macos")]
    {
        Box::new(MacNotificationCenter::new())
    }

    #[cfg(not(target_os = "macos"))]
    {
        Box::new(InMemoryNotificationCenter::new())
    }
}

/// Whether [`create_notification_center`] returns the OS-backed center
pub const fn is_native_center_available() -> bool {
    cfg!(target_os = "macos")
}
