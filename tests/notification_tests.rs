//! Notification adapter scenarios against the in-memory center

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};

use local_notify::application::ports::NotificationCenter;
use local_notify::application::LocalNotifications;
use local_notify::domain::{NotificationId, RepeatInterval};
use local_notify::infrastructure::InMemoryNotificationCenter;

fn setup() -> (
    LocalNotifications<Arc<InMemoryNotificationCenter>>,
    Arc<InMemoryNotificationCenter>,
) {
    let center = Arc::new(InMemoryNotificationCenter::new());
    (LocalNotifications::new(Arc::clone(&center)), center)
}

#[test]
fn hourly_notification_cancelled_before_delivery() {
    let (notifications, center) = setup();
    let at = Utc::now() + ChronoDuration::hours(1);

    notifications.show_at("Stretch", "Stand up", NotificationId::new(5), at, RepeatInterval::Hour);

    let scheduled = center.scheduled().unwrap();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].identifier(), "5");
    let descriptor = scheduled[0].recurrence.expect("hourly descriptor");
    assert_eq!(descriptor.hours, Some(1));
    assert_eq!(descriptor.fields().iter().flatten().count(), 1);

    notifications.cancel(NotificationId::new(5));
    assert!(center.scheduled().unwrap().is_empty());

    // Nothing left for the scheduler to deliver
    assert_eq!(center.deliver_due(at + ChronoDuration::hours(5)), 0);
    assert!(center.delivered().unwrap().is_empty());
}

#[test]
fn immediate_notification_cleared_after_delivery() {
    let (notifications, center) = setup();

    notifications.show("Done", "Build finished", NotificationId::new(1));
    assert_eq!(center.deliver_due(Utc::now()), 1);
    assert!(center.scheduled().unwrap().is_empty());
    assert_eq!(center.delivered().unwrap()[0].identifier(), "1");

    notifications.cancel(NotificationId::new(1));

    assert!(center.delivered().unwrap().is_empty());
}

#[test]
fn cancel_recurring_after_first_delivery_clears_both() {
    let (notifications, center) = setup();
    let start = Utc::now();

    notifications.show_at(
        "Tick",
        "Every minute",
        NotificationId::new(7),
        start,
        RepeatInterval::Minute,
    );
    center.deliver_due(start);

    assert_eq!(center.scheduled().unwrap().len(), 1);
    assert_eq!(center.delivered().unwrap().len(), 1);

    notifications.cancel(NotificationId::new(7));

    assert!(center.scheduled().unwrap().is_empty());
    assert!(center.delivered().unwrap().is_empty());
}

#[test]
fn cancel_leaves_other_ids_alone() {
    let (notifications, center) = setup();
    let later = Utc::now() + ChronoDuration::days(1);

    notifications.show_at("A", "a", NotificationId::new(1), later, RepeatInterval::Never);
    notifications.show_at("B", "b", NotificationId::new(2), later, RepeatInterval::Day);

    notifications.cancel(NotificationId::new(1));
    notifications.cancel(NotificationId::new(3));

    let remaining = notifications.scheduled();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, NotificationId::new(2));
    assert_eq!(remaining[0].repeat_interval(), RepeatInterval::Day);
}

#[test]
fn past_delivery_time_is_accepted() {
    let (notifications, center) = setup();
    let past = Utc::now() - ChronoDuration::days(2);

    notifications.show_at(
        "Late",
        "Already past",
        NotificationId::new(4),
        past,
        RepeatInterval::Never,
    );

    assert_eq!(center.scheduled().unwrap()[0].deliver_at, past);
    assert_eq!(center.deliver_due(Utc::now()), 1);
}

#[test]
fn boxed_center_behaves_like_concrete() {
    let center: Box<dyn NotificationCenter> = Box::new(InMemoryNotificationCenter::new());
    let notifications = LocalNotifications::new(center);

    notifications.show("T", "B", NotificationId::default());
    assert_eq!(notifications.scheduled().len(), 1);
    assert_eq!(notifications.scheduled()[0].identifier(), "0");

    notifications.cancel(NotificationId::default());
    assert!(notifications.scheduled().is_empty());
}
