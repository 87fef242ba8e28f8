//! Timer-driven notification state.
//!
//! [`Notifier`] owns the two pieces of process-lifetime state around
//! [`upcoming_events`](crate::notify::upcoming_events): the set of event ids
//! that have already alerted (monotonic, never cleared) and the list of
//! alerts currently on screen. A driving loop calls [`Notifier::tick`] at a
//! fixed interval; each tick completes before the next is scheduled, so no
//! locking is needed.

use std::collections::HashSet;

use crate::clock::{Clock, SystemClock};
use crate::event::Event;
use crate::notify::{notification_message, upcoming_events};

/// A rendered alert for a due event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub event_id: String,
    pub message: String,
}

pub struct Notifier<C: Clock = SystemClock> {
    clock: C,
    notified_ids: HashSet<String>,
    alerts: Vec<Alert>,
}

impl Notifier<SystemClock> {
    pub fn new() -> Self {
        Notifier::with_clock(SystemClock)
    }
}

impl Default for Notifier<SystemClock> {
    fn default() -> Self {
        Notifier::new()
    }
}

impl<C: Clock> Notifier<C> {
    pub fn with_clock(clock: C) -> Self {
        Notifier {
            clock,
            notified_ids: HashSet::new(),
            alerts: Vec::new(),
        }
    }

    /// Compute newly due events against the injected clock, append their
    /// alerts and mark their ids as notified. Returns the alerts fired by
    /// this tick; an id fires at most once per process lifetime.
    pub fn tick(&mut self, events: &[Event]) -> Vec<Alert> {
        let now = self.clock.now();
        let due = upcoming_events(events, now, &self.notified_ids);

        let mut fired = Vec::with_capacity(due.len());
        for event in due {
            let alert = Alert {
                message: notification_message(&event),
                event_id: event.id.clone(),
            };
            self.notified_ids.insert(event.id);
            self.alerts.push(alert.clone());
            fired.push(alert);
        }
        fired
    }

    /// Alerts currently on screen.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Remove an alert from the displayed list by position. The notified-id
    /// set is untouched, so a dismissed alert never reappears.
    pub fn dismiss(&mut self, index: usize) -> Option<Alert> {
        if index < self.alerts.len() {
            Some(self.alerts.remove(index))
        } else {
            None
        }
    }

    pub fn notified_ids(&self) -> &HashSet<String> {
        &self.notified_ids
    }
}
