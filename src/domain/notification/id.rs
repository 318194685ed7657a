//! Notification identifier value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidNotificationIdError;

/// Caller-supplied notification identifier.
///
/// The only lookup key for cancellation. Uniqueness is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(i32);

impl NotificationId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Identifier string stored on the platform notification
    pub fn platform_identifier(&self) -> String {
        self.0.to_string()
    }

    /// True when a platform identifier refers to this id
    pub fn matches(&self, identifier: &str) -> bool {
        identifier == self.platform_identifier()
    }
}

impl From<i32> for NotificationId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl FromStr for NotificationId {
    type Err = InvalidNotificationIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| InvalidNotificationIdError { input: s.to_string() })
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
