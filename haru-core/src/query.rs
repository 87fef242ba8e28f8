//! Event queries: day lookup and view/search filtering.

use chrono::{Datelike, NaiveDate};

use crate::dates::{days_in_month, is_date_in_range, week_dates};
use crate::event::Event;

/// Active calendar granularity for display and search scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Week,
    Month,
}

/// Events whose day-of-month equals `day`. Matches on the day component
/// only; callers scope the collection to a month/year first. Empty for
/// `day` outside `[1, 31]`.
pub fn events_for_day(events: &[Event], day: u32) -> Vec<Event> {
    if day == 0 || day > 31 {
        return Vec::new();
    }
    events.iter().filter(|e| e.date.day() == day).cloned().collect()
}

/// Two-stage filter: first scope events to the week or month containing
/// `reference`, then keep events where `term` (case-insensitive) is a
/// substring of title, description or location. An empty term passes all.
/// Input order is preserved.
pub fn filtered_events(events: &[Event], term: &str, reference: NaiveDate, view: View) -> Vec<Event> {
    let scoped: Vec<Event> = match view {
        View::Week => {
            let week = week_dates(reference);
            events
                .iter()
                .filter(|e| is_date_in_range(e.date, week[0], week[6]))
                .cloned()
                .collect()
        }
        View::Month => {
            let first = reference.with_day(1).expect("valid date");
            let last_day = days_in_month(reference.year(), reference.month() as i32);
            let last =
                NaiveDate::from_ymd_opt(reference.year(), reference.month(), last_day).expect("valid date");
            events
                .iter()
                .filter(|e| is_date_in_range(e.date, first, last))
                .cloned()
                .collect()
        }
    };

    if term.is_empty() {
        return scoped;
    }

    let term = term.to_lowercase();
    scoped
        .into_iter()
        .filter(|e| {
            e.title.to_lowercase().contains(&term)
                || e.description.to_lowercase().contains(&term)
                || e.location.to_lowercase().contains(&term)
        })
        .collect()
}
