//! Terminal rendering for haru types.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use haru_core::Event;
use haru_core::dates::{format_month, format_week, week_dates, weeks_of_month};
use haru_core::query::events_for_day;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        );
        let mut line = format!("{} {}", time.dimmed(), self.title);
        if !self.location.is_empty() {
            line.push_str(&format!(" @ {}", self.location));
        }
        if !self.category.is_empty() {
            line.push_str(&format!(" [{}]", self.category));
        }
        if self.repeat.is_recurring() {
            line.push_str(&format!(" {}", "↻".cyan()));
        }
        line
    }
}

const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Month grid with holidays in red and event days highlighted, followed by
/// the holiday names and the (already view-filtered) event list.
pub fn month_lines(
    reference: NaiveDate,
    events: &[Event],
    holidays: &BTreeMap<NaiveDate, String>,
) -> Vec<String> {
    let mut lines = vec![
        format_month(reference).bold().to_string(),
        WEEKDAY_LABELS.map(|d| format!("{:>3}", d)).join(" "),
    ];

    for row in weeks_of_month(reference) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                None => "   ".to_string(),
                Some(day) => {
                    let text = format!("{:>3}", day);
                    let date = reference.with_day(*day).expect("valid day");
                    if holidays.contains_key(&date) {
                        text.red().to_string()
                    } else if !events_for_day(events, *day).is_empty() {
                        text.green().bold().to_string()
                    } else {
                        text
                    }
                }
            })
            .collect();
        lines.push(cells.join(" "));
    }

    for (date, name) in holidays {
        lines.push(format!("{} {}", date.format("%m-%d").to_string().dimmed(), name.red()));
    }

    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| (e.date, e.start_time));
    if !sorted.is_empty() {
        lines.push(String::new());
    }
    for event in sorted {
        lines.push(format!(
            "{} {}",
            event.date.format("%m-%d").to_string().dimmed(),
            event.render()
        ));
    }

    lines
}

/// The seven days of the week containing `reference` with their events.
pub fn week_lines(reference: NaiveDate, events: &[Event]) -> Vec<String> {
    let mut lines = vec![format_week(reference).bold().to_string()];

    for (i, date) in week_dates(reference).into_iter().enumerate() {
        let label = format!("{} ({})", date.format("%m-%d"), WEEKDAY_LABELS[i]);
        let mut day_events: Vec<&Event> = events.iter().filter(|e| e.date == date).collect();
        day_events.sort_by_key(|e| e.start_time);

        if day_events.is_empty() {
            lines.push(format!("  {}", label.dimmed()));
        } else {
            lines.push(format!("  {}", label));
            for event in day_events {
                lines.push(format!("    {}", event.render()));
            }
        }
    }

    lines
}
