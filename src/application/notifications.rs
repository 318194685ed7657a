//! Local notification use case
//!
//! Maps show, scheduled show and cancel onto a [`NotificationCenter`].
//! Nothing here reports failure to the caller: center errors are logged
//! and dropped, and cancelling an unknown id does nothing.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::notification::{NotificationId, NotificationRequest, RepeatInterval};

use super::ports::NotificationCenter;

/// Which of the center's two collections an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Scheduled,
    Delivered,
}

impl Collection {
    const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Delivered => "delivered",
        }
    }
}

/// Notification adapter over an injected notification center.
///
/// Holds no state of its own; scheduled and delivered notifications live
/// in the center.
pub struct LocalNotifications<C: NotificationCenter> {
    center: C,
}

impl<C: NotificationCenter> LocalNotifications<C> {
    pub fn new(center: C) -> Self {
        Self { center }
    }

    /// Access the underlying center
    pub fn center(&self) -> &C {
        &self.center
    }

    /// Show a notification as soon as possible, without repeating.
    pub fn show(&self, title: &str, body: &str, id: NotificationId) {
        self.show_at(title, body, id, Utc::now(), RepeatInterval::Never);
    }

    /// Schedule a notification for `deliver_at`, repeating every `repeat`.
    ///
    /// Past instants and duplicate ids are passed through unchanged; what
    /// happens to them is up to the center.
    pub fn show_at(
        &self,
        title: &str,
        body: &str,
        id: NotificationId,
        deliver_at: DateTime<Utc>,
        repeat: RepeatInterval,
    ) {
        let request = NotificationRequest::new(title, body, id, deliver_at, repeat);

        debug!(
            id = %request.id,
            deliver_at = %request.deliver_at,
            repeat = %repeat,
            "scheduling notification"
        );

        if let Err(e) = self.center.schedule(&request) {
            warn!(id = %id, error = %e, "failed to schedule notification");
        }
    }

    /// Cancel notification `id`.
    ///
    /// A scheduled match is removed so it is never delivered; a delivered
    /// match is removed from the visible list. Both are handled
    /// independently.
    pub fn cancel(&self, id: NotificationId) {
        let scheduled = self.find(id, Collection::Scheduled);
        let delivered = self.find(id, Collection::Delivered);

        if scheduled.is_none() && delivered.is_none() {
            debug!(id = %id, "nothing to cancel");
            return;
        }

        if let Some(request) = scheduled {
            debug!(id = %id, "removing scheduled notification");
            if let Err(e) = self.center.remove_scheduled(&request) {
                warn!(id = %id, error = %e, "failed to remove scheduled notification");
            }
        }

        if let Some(request) = delivered {
            debug!(id = %id, "removing delivered notification");
            if let Err(e) = self.center.remove_delivered(&request) {
                warn!(id = %id, error = %e, "failed to remove delivered notification");
            }
        }
    }

    /// Notifications waiting for delivery
    pub fn scheduled(&self) -> Vec<NotificationRequest> {
        self.list(Collection::Scheduled)
    }

    /// Notifications already delivered and still listed
    pub fn delivered(&self) -> Vec<NotificationRequest> {
        self.list(Collection::Delivered)
    }

    fn list(&self, collection: Collection) -> Vec<NotificationRequest> {
        let result = match collection {
            Collection::Scheduled => self.center.scheduled(),
            Collection::Delivered => self.center.delivered(),
        };

        result.unwrap_or_else(|e| {
            warn!(
                collection = collection.as_str(),
                error = %e,
                "failed to list notifications"
            );
            Vec::new()
        })
    }

    fn find(&self, id: NotificationId, collection: Collection) -> Option<NotificationRequest> {
        self.list(collection).into_iter().find(|r| r.id == id)
    }
}
