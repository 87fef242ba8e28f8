//! Time-interval overlap detection between events.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::event::{Event, EventForm};

/// Combine a date with start/end wall-clock times into comparable instants.
pub fn event_slot(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> (NaiveDateTime, NaiveDateTime) {
    (date.and_time(start), date.and_time(end))
}

fn slots_overlap(a: (NaiveDateTime, NaiveDateTime), b: (NaiveDateTime, NaiveDateTime)) -> bool {
    // Half-open [start, end): touching endpoints do not overlap
    a.0 < b.1 && b.0 < a.1
}

/// All events whose `[start, end)` interval intersects the candidate's,
/// in input order. `exclude_id` removes the event being edited from
/// consideration so it never conflicts with itself; pass `None` for a new
/// draft.
pub fn find_overlapping_events(
    candidate: &EventForm,
    exclude_id: Option<&str>,
    events: &[Event],
) -> Vec<Event> {
    let candidate_slot = event_slot(candidate.date, candidate.start_time, candidate.end_time);

    events
        .iter()
        .filter(|e| exclude_id != Some(e.id.as_str()))
        .filter(|e| slots_overlap(candidate_slot, event_slot(e.date, e.start_time, e.end_time)))
        .cloned()
        .collect()
}
