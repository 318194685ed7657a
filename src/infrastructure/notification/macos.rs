//! Native macOS notification center adapter
//!
//! Drives `NSUserNotificationCenter` through the Objective-C runtime.
//! Every call runs inside its own autorelease pool.

use std::ffi::CStr;
use std::os::raw::c_char;

use chrono::{DateTime, TimeZone, Utc};
use cocoa::base::{id, nil};
use cocoa::foundation::{NSAutoreleasePool, NSInteger, NSString, NSUInteger};
use objc::{class, msg_send, sel, sel_impl};
use tracing::debug;

use crate::application::ports::{NotificationCenter, NotificationCenterError};
use crate::domain::notification::{NotificationId, NotificationRequest, RecurrenceDescriptor};

/// `NSDateComponentUndefined`
const UNDEFINED_COMPONENT: NSInteger = NSInteger::MAX;

#[derive(Debug, Clone, Copy)]
enum Collection {
    Scheduled,
    Delivered,
}

/// Adapter over the process-wide `NSUserNotificationCenter`
#[derive(Debug, Default, Clone, Copy)]
pub struct MacNotificationCenter;

impl MacNotificationCenter {
    pub fn new() -> Self {
        Self
    }
}

/// Run `f` against the default center inside an autorelease pool
fn with_center<T>(
    f: impl FnOnce(id) -> Result<T, NotificationCenterError>,
) -> Result<T, NotificationCenterError> {
    unsafe {
        let pool = NSAutoreleasePool::new(nil);
        let center: id = msg_send![class!(NSUserNotificationCenter), defaultUserNotificationCenter];

        let result = if center == nil {
            Err(NotificationCenterError::Unavailable(
                "no default user notification center (is the binary running inside an app bundle?)"
                    .to_string(),
            ))
        } else {
            f(center)
        };

        pool.drain();
        result
    }
}

/// Autoreleased `NSString` copy of `text`
unsafe fn ns_string(text: &str) -> id {
    let string = NSString::alloc(nil).init_str(text);
    let _: id = msg_send![string, autorelease];
    string
}

/// Owned copy of an `NSString`, `None` for nil
unsafe fn rust_string(string: id) -> Option<String> {
    if string == nil {
        return None;
    }
    let ptr: *const c_char = msg_send![string, UTF8String];
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

unsafe fn ns_date(at: DateTime<Utc>) -> id {
    let interval = at.timestamp_millis() as f64 / 1000.0;
    msg_send![class!(NSDate), dateWithTimeIntervalSince1970: interval]
}

unsafe fn chrono_date(date: id) -> Option<DateTime<Utc>> {
    if date == nil {
        return None;
    }
    let interval: f64 = msg_send![date, timeIntervalSince1970];
    Utc.timestamp_millis_opt((interval * 1000.0).round() as i64).single()
}

/// Autoreleased `NSDateComponents` with only the descriptor's units set
unsafe fn date_components(recurrence: &RecurrenceDescriptor) -> id {
    let components: id = msg_send![class!(NSDateComponents), new];
    let _: id = msg_send![components, autorelease];

    if let Some(years) = recurrence.years {
        let _: () = msg_send![components, setYear: years as NSInteger];
    }
    if let Some(months) = recurrence.months {
        let _: () = msg_send![components, setMonth: months as NSInteger];
    }
    if let Some(days) = recurrence.days {
        let _: () = msg_send![components, setDay: days as NSInteger];
    }
    if let Some(hours) = recurrence.hours {
        let _: () = msg_send![components, setHour: hours as NSInteger];
    }
    if let Some(minutes) = recurrence.minutes {
        let _: () = msg_send![components, setMinute: minutes as NSInteger];
    }
    if let Some(seconds) = recurrence.seconds {
        let _: () = msg_send![components, setSecond: seconds as NSInteger];
    }

    components
}

fn component(value: NSInteger) -> Option<u32> {
    if value == UNDEFINED_COMPONENT {
        return None;
    }
    u32::try_from(value).ok().filter(|v| *v > 0)
}

unsafe fn read_components(components: id) -> Option<RecurrenceDescriptor> {
    if components == nil {
        return None;
    }

    let years: NSInteger = msg_send![components, year];
    let months: NSInteger = msg_send![components, month];
    let days: NSInteger = msg_send![components, day];
    let hours: NSInteger = msg_send![components, hour];
    let minutes: NSInteger = msg_send![components, minute];
    let seconds: NSInteger = msg_send![components, second];

    let descriptor = RecurrenceDescriptor {
        years: component(years),
        months: component(months),
        days: component(days),
        hours: component(hours),
        minutes: component(minutes),
        seconds: component(seconds),
    };

    (!descriptor.is_empty()).then_some(descriptor)
}

/// Autoreleased `NSUserNotification` for `request`
unsafe fn build_notification(request: &NotificationRequest) -> id {
    let notification: id = msg_send![class!(NSUserNotification), new];
    let _: id = msg_send![notification, autorelease];

    let title = ns_string(&request.title);
    let body = ns_string(&request.body);
    let identifier = ns_string(&request.identifier());
    let delivery_date = ns_date(request.deliver_at);

    let _: () = msg_send![notification, setTitle: title];
    let _: () = msg_send![notification, setInformativeText: body];
    let _: () = msg_send![notification, setIdentifier: identifier];
    let _: () = msg_send![notification, setDeliveryDate: delivery_date];

    if let Some(recurrence) = request.recurrence {
        let interval = date_components(&recurrence);
        let _: () = msg_send![notification, setDeliveryRepeatInterval: interval];
    }

    notification
}

/// Read a platform notification back. Entries whose identifier is not one
/// of ours (not an integer) are skipped.
unsafe fn read_notification(notification: id) -> Option<NotificationRequest> {
    let identifier: id = msg_send![notification, identifier];
    let id = rust_string(identifier)?.parse::<NotificationId>().ok()?;

    let title: id = msg_send![notification, title];
    let body: id = msg_send![notification, informativeText];
    let actual_date: id = msg_send![notification, actualDeliveryDate];
    let delivery_date: id = msg_send![notification, deliveryDate];
    let interval: id = msg_send![notification, deliveryRepeatInterval];

    let deliver_at = chrono_date(actual_date)
        .or_else(|| chrono_date(delivery_date))
        .unwrap_or_else(Utc::now);

    Some(NotificationRequest {
        title: rust_string(title).unwrap_or_default(),
        body: rust_string(body).unwrap_or_default(),
        id,
        deliver_at,
        recurrence: read_components(interval),
    })
}

/// Platform notification objects in `collection`
unsafe fn notifications(
    center: id,
    collection: Collection,
) -> Result<Vec<id>, NotificationCenterError> {
    let array: id = match collection {
        Collection::Scheduled => msg_send![center, scheduledNotifications],
        Collection::Delivered => msg_send![center, deliveredNotifications],
    };
    if array == nil {
        return Err(NotificationCenterError::Platform(format!(
            "{:?} notifications list is nil",
            collection
        )));
    }

    let count: NSUInteger = msg_send![array, count];
    Ok((0..count)
        .map(|index| {
            let notification: id = msg_send![array, objectAtIndex: index];
            notification
        })
        .collect())
}

fn list(collection: Collection) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
    with_center(|center| unsafe {
        Ok(notifications(center, collection)?
            .into_iter()
            .filter_map(|n| read_notification(n))
            .collect())
    })
}

fn remove(collection: Collection, target: NotificationId) -> Result<(), NotificationCenterError> {
    with_center(|center| unsafe {
        let matches: Vec<id> = notifications(center, collection)?
            .into_iter()
            .filter(|n| {
                let current: id = msg_send![*n, identifier];
                rust_string(current).is_some_and(|identifier| target.matches(&identifier))
            })
            .collect();

        debug!(id = %target, count = matches.len(), ?collection, "removing native notifications");

        for notification in matches {
            match collection {
                Collection::Scheduled => {
                    let _: () = msg_send![center, removeScheduledNotification: notification];
                }
                Collection::Delivered => {
                    let _: () = msg_send![center, removeDeliveredNotification: notification];
                }
            }
        }
        Ok(())
    })
}

impl NotificationCenter for MacNotificationCenter {
    fn schedule(&self, request: &NotificationRequest) -> Result<(), NotificationCenterError> {
        with_center(|center| unsafe {
            let notification = build_notification(request);
            let _: () = msg_send![center, scheduleNotification: notification];
            Ok(())
        })
    }

    fn scheduled(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
        list(Collection::Scheduled)
    }

    fn delivered(&self) -> Result<Vec<NotificationRequest>, NotificationCenterError> {
        list(Collection::Delivered)
    }

    fn remove_scheduled(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError> {
        remove(Collection::Scheduled, request.id)
    }

    fn remove_delivered(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), NotificationCenterError> {
        remove(Collection::Delivered, request.id)
    }
}
