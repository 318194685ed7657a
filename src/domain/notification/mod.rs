//! Notification domain types

mod id;
mod recurrence;
mod repeat_interval;
mod request;

pub use id::NotificationId;
pub use recurrence::RecurrenceDescriptor;
pub use repeat_interval::{RepeatInterval, ALL_INTERVALS};
pub use request::NotificationRequest;
