//! Process-local notification center
//!
//! Stands in for the OS center where no native one exists, and in tests.
//! Nothing is delivered on its own: call [`InMemoryNotificationCenter::deliver_due`]
//! to play the part of the OS scheduler.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::application::ports::{NotificationCenter, NotificationCenterError};
use crate::domain::notification::{NotificationId, NotificationRequest};

#[derive(Debug, Default)]
struct CenterState {
    scheduled: Vec<NotificationRequest>,
    delivered: Vec<NotificationRequest>,
}

impl CenterState {
    /// Deliver the scheduled entry at `index`. Recurring entries stay
    /// scheduled at their next occurrence after `now`.
    ///
    /// # Returns
    /// true when the entry is still scheduled
    fn deliver(&mut self, index: usize, now: DateTime<Utc>) -> bool {
        let next = self.scheduled[index]
            .recurrence
            .and_then(|r| r.first_after(self.scheduled[index].deliver_at, now));

        match next {
            Some(next) => {
                let entry = &mut self.scheduled[index];
                self.delivered.push(entry.clone());
                entry.deliver_at = next;
                true
            }
            None => {
                let entry = self.scheduled.remove(index);
                self.delivered.push(entry);
                false
            }
        }
    }
}

/// In-memory notification center with scheduled and delivered collections
#[derive(Debug, Default)]
pub struct InMemoryNotificationCenter {
    state: Mutex<CenterState>,
}

impl InMemoryNotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CenterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deliver every scheduled entry due at `now`.
    ///
    /// # Returns
    /// Number of notifications delivered
    pub fn deliver_due(&self, now: DateTime<Utc>) -> usize {
        let mut state = self.lock();
        let mut delivered = 0;
        let mut index = 0;

        while index < state.scheduled.len() {
            if !state.scheduled[index].is_due(now) {
                index += 1;
                continue;
            }

            if state.deliver(index, now) {
                index += 1;
            }
            delivered += 1;
        }

        delivered
    }

    /// Deliver every scheduled entry with `id`, whatever its delivery time.
    ///
    /// # Returns
    /// Number of notifications delivered
    pub fn mark_delivered(&self, id: NotificationId) -> usize {
        let mut state = self.lock();
        let now = Utc::now();
        let mut delivered = 0;
        let mut index = 0;

        while index < state.scheduled.len() {
            if state.scheduled[index].id != id {
                index += 1;
                continue;
            }

            if state.deliver(index, now) {
                index += 1;
            }
            delivered += 1;
        }

        delivered
    }
}

impl NotificationCenter for InMemoryNotificationCenter {
    fn schedule(&self, request: &NotificationRequest) -> Result<(), NotificationCenterError> {
        self.lock().scheduled.push(request.clone());
        Ok(())
    }

    fn scheduled(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
        Ok(self.lock().scheduled.clone())
    }

    fn delivered(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
        Ok(self.lock().delivered.clone())
    }

    fn remove_scheduled(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError> {
        self.lock().scheduled.retain(|r| r.id != request.id);
        Ok(())
    }

    fn remove_delivered(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError> {
        self.lock().delivered.retain(|r| r.id != request.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone};

    use crate::domain::notification::RepeatInterval;

    fn request(id: i32, at: DateTime<Utc>, repeat: RepeatInterval) -> NotificationRequest {
        NotificationRequest::new("t", "b", NotificationId::new(id), at, repeat)
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn deliver_due_moves_only_due_entries() {
        let center = InMemoryNotificationCenter::new();
        center.schedule(&request(1, noon(), RepeatInterval::Never)).unwrap();
        center
            .schedule(&request(2, noon() + ChronoDuration::hours(1), RepeatInterval::Never))
            .unwrap();

        assert_eq!(center.deliver_due(noon()), 1);

        let scheduled = center.scheduled().unwrap();
        let delivered = center.delivered().unwrap();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].id.value(), 2);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].id.value(), 1);
    }

    #[test]
    fn recurring_entry_stays_scheduled() {
        let center = InMemoryNotificationCenter::new();
        center.schedule(&request(5, noon(), RepeatInterval::Hour)).unwrap();

        assert_eq!(center.deliver_due(noon() + ChronoDuration::minutes(90)), 1);

        let scheduled = center.scheduled().unwrap();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].deliver_at, noon() + ChronoDuration::hours(2));
        assert_eq!(center.delivered().unwrap().len(), 1);
    }

    #[test]
    fn recurring_entry_catches_up_after_long_gap() {
        let center = InMemoryNotificationCenter::new();
        let start = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
        center.schedule(&request(9, start, RepeatInterval::Second)).unwrap();

        assert_eq!(center.deliver_due(noon()), 1);

        let scheduled = center.scheduled().unwrap();
        assert_eq!(scheduled[0].deliver_at, noon() + ChronoDuration::seconds(1));
        assert_eq!(center.delivered().unwrap()[0].deliver_at, start);
    }

    #[test]
    fn deliver_due_with_nothing_due() {
        let center = InMemoryNotificationCenter::new();
        center
            .schedule(&request(1, noon() + ChronoDuration::days(1), RepeatInterval::Never))
            .unwrap();
        assert_eq!(center.deliver_due(noon()), 0);
        assert!(center.delivered().unwrap().is_empty());
    }

    #[test]
    fn mark_delivered_ignores_time() {
        let center = InMemoryNotificationCenter::new();
        center
            .schedule(&request(3, Utc::now() + ChronoDuration::days(30), RepeatInterval::Never))
            .unwrap();

        assert_eq!(center.mark_delivered(NotificationId::new(3)), 1);
        assert!(center.scheduled().unwrap().is_empty());
        assert_eq!(center.delivered().unwrap()[0].identifier(), "3");
    }

    #[test]
    fn remove_targets_all_matching_ids() {
        let center = InMemoryNotificationCenter::new();
        let first = request(7, noon(), RepeatInterval::Never);
        center.schedule(&first).unwrap();
        center.schedule(&request(7, noon(), RepeatInterval::Day)).unwrap();
        center.schedule(&request(8, noon(), RepeatInterval::Never)).unwrap();

        center.remove_scheduled(&first).unwrap();

        let scheduled = center.scheduled().unwrap();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].id.value(), 8);
    }
}
