//! Korean public holiday lookup.
//!
//! A static table keyed by date; `holidays_for_month` narrows it to the
//! month being displayed. TODO: source the table from an external feed
//! instead of shipping a single year.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

const HOLIDAYS: &[(&str, &str)] = &[
    ("2024-01-01", "신정"),
    ("2024-02-09", "설날"),
    ("2024-02-10", "설날"),
    ("2024-02-11", "설날"),
    ("2024-03-01", "삼일절"),
    ("2024-05-05", "어린이날"),
    ("2024-06-06", "현충일"),
    ("2024-08-15", "광복절"),
    ("2024-09-16", "추석"),
    ("2024-09-17", "추석"),
    ("2024-09-18", "추석"),
    ("2024-10-03", "개천절"),
    ("2024-10-09", "한글날"),
    ("2024-12-25", "크리스마스"),
];

/// Holidays falling in the month containing `date`, ordered by date.
pub fn holidays_for_month(date: NaiveDate) -> BTreeMap<NaiveDate, String> {
    HOLIDAYS
        .iter()
        .filter_map(|(day, name)| {
            let holiday = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
            (holiday.year() == date.year() && holiday.month() == date.month())
                .then(|| (holiday, (*name).to_string()))
        })
        .collect()
}
