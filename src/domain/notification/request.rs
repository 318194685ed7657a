//! Notification request entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::NotificationId;
use super::recurrence::RecurrenceDescriptor;
use super::repeat_interval::RepeatInterval;

/// A notification as handed to (or read back from) the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub id: NotificationId,
    pub deliver_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceDescriptor>,
}

impl NotificationRequest {
    /// Build a request, deriving the recurrence descriptor from `repeat`
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        id: NotificationId,
        deliver_at: DateTime<Utc>,
        repeat: RepeatInterval,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            id,
            deliver_at,
            recurrence: repeat.recurrence(),
        }
    }

    /// Identifier string used as the platform lookup key
    pub fn identifier(&self) -> String {
        self.id.platform_identifier()
    }

    /// Repeat interval derived from the descriptor
    pub fn repeat_interval(&self) -> RepeatInterval {
        self.recurrence
            .and_then(|r| r.repeat_interval())
            .unwrap_or_default()
    }

    /// Whether this request is due at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.deliver_at <= now
    }
}
