//! Show, cancel and list command handlers

use serde::Serialize;

use crate::application::ports::NotificationCenter;
use crate::application::LocalNotifications;
use crate::domain::notification::{NotificationId, NotificationRequest};

use super::args::{ListOptions, ShowOptions};
use super::presenter::Presenter;

/// JSON shape of `list --json`
#[derive(Debug, Serialize)]
struct Listing {
    #[serde(skip_serializing_if = "Option::is_none")]
    scheduled: Option<Vec<NotificationRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivered: Option<Vec<NotificationRequest>>,
}

/// Handle `show`
pub fn handle_show<C: NotificationCenter>(
    options: ShowOptions,
    notifications: &LocalNotifications<C>,
    presenter: &Presenter,
) {
    let ShowOptions {
        title,
        body,
        id,
        deliver_at,
        repeat,
    } = options;

    match deliver_at {
        None if !repeat.is_recurring() => {
            notifications.show(&title, &body, id);
            presenter.success(&format!("Notification {} submitted", id));
        }
        _ => {
            let at = deliver_at.unwrap_or_else(chrono::Utc::now);
            notifications.show_at(&title, &body, id, at, repeat);

            let mut message = format!(
                "Notification {} scheduled for {}",
                id,
                at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S")
            );
            if repeat.is_recurring() {
                message.push_str(&format!(", repeating every {}", repeat));
            }
            presenter.success(&message);
        }
    }
}

/// Handle `cancel`
pub fn handle_cancel<C: NotificationCenter>(
    id: NotificationId,
    notifications: &LocalNotifications<C>,
    presenter: &Presenter,
) {
    notifications.cancel(id);
    presenter.success(&format!("Notification {} cancelled", id));
}

/// Handle `list`
pub fn handle_list<C: NotificationCenter>(
    options: ListOptions,
    notifications: &LocalNotifications<C>,
    presenter: &Presenter,
) -> Result<(), serde_json::Error> {
    let listing = Listing {
        scheduled: options.scheduled.then(|| notifications.scheduled()),
        delivered: options.delivered.then(|| notifications.delivered()),
    };

    if options.json {
        presenter.output(&serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let sections = [
        ("Scheduled", &listing.scheduled),
        ("Delivered", &listing.delivered),
    ];
    for (heading, entries) in sections {
        if let Some(entries) = entries {
            presenter.heading(heading, entries.len());
            for request in entries {
                presenter.notification(request);
            }
        }
    }

    Ok(())
}
