//! Notification center port interface

use std::sync::Arc;

use thiserror::Error;

use crate::domain::notification::NotificationRequest;

/// Notification center errors
#[derive(Debug, Clone, Error)]
pub enum NotificationCenterError {
    #[error("Notification center unavailable: {0}")]
    Unavailable(String),

    #[error("Notification center call failed: {0}")]
    Platform(String),
}

/// Port for the process-wide notification center.
///
/// The center owns two disjoint collections, scheduled and delivered, both
/// keyed by the request identifier. Calls are synchronous and must be safe
/// to make from any thread.
pub trait NotificationCenter: Send + Sync {
    /// Hand a request to the center for (possibly repeated) delivery.
    fn schedule(&self, request: &NotificationRequest) -> Result<(), NotificationCenterError>;

    /// Requests that have not been delivered yet.
    fn scheduled(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError>;

    /// Requests that have been delivered and are still listed.
    fn delivered(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError>;

    /// Remove every scheduled entry whose identifier matches `request`.
    fn remove_scheduled(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError>;

    /// Remove every delivered entry whose identifier matches `request`.
    fn remove_delivered(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError>;
}

/// Blanket implementation for boxed notification centers
impl NotificationCenter for Box<dyn NotificationCenter> {
    fn schedule(&self, request: &NotificationRequest) -> Result<(), NotificationCenterError> {
        self.as_ref().schedule(request)
    }

    fn scheduled(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
        self.as_ref().scheduled()
    }

    fn delivered(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
        self.as_ref().delivered()
    }

    fn remove_scheduled(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError> {
        self.as_ref().remove_scheduled(request)
    }

    fn remove_delivered(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError> {
        self.as_ref().remove_delivered(request)
    }
}

/// Shared centers, so a test can keep a handle to the fake it injected
impl<C: NotificationCenter + ?Sized> NotificationCenter for Arc<C> {
    fn schedule(&self, request: &NotificationRequest) -> Result<(), NotificationCenterError> {
        self.as_ref().schedule(request)
    }

    fn scheduled(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
        self.as_ref().scheduled()
    }

    fn delivered(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
        self.as_ref().delivered()
    }

    fn remove_scheduled(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError> {
        self.as_ref().remove_scheduled(request)
    }

    fn remove_delivered(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError> {
        self.as_ref().remove_delivered(request)
    }
}
