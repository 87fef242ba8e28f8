//! Notification due-time computation and alert text.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::event::Event;

/// Events whose notification window contains `now` and whose id has not
/// yet been notified, in input order.
///
/// The window is `[start - notification_time, start]`, inclusive on both
/// ends: an event starting exactly now is still due, and so is one exactly
/// at its configured lead time. Durations are compared directly so
/// sub-minute `now` values round-trip correctly.
pub fn upcoming_events(
    events: &[Event],
    now: NaiveDateTime,
    notified_ids: &HashSet<String>,
) -> Vec<Event> {
    events
        .iter()
        .filter(|e| {
            if notified_ids.contains(&e.id) {
                return false;
            }
            let lead = e.start().signed_duration_since(now);
            lead >= Duration::zero() && lead <= Duration::minutes(e.notification_time)
        })
        .cloned()
        .collect()
}

/// Alert text shown when an event becomes due.
pub fn notification_message(event: &Event) -> String {
    format!(
        "{}분 후 {} 일정이 시작됩니다.",
        event.notification_time, event.title
    )
}
