//! Pure calendar date arithmetic.
//!
//! Weeks run Sunday through Saturday. Week labels follow the ISO-style rule
//! that a week belongs to the month containing its Thursday, which resolves
//! weeks spanning a month or year boundary.

use chrono::{Datelike, Duration, NaiveDate};

/// Number of days in the given month.
///
/// `month` is 1-indexed but out-of-range values wrap into the adjacent year:
/// month 0 is December of the previous year, month 13 is January of the next.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let year = year + (month - 1).div_euclid(12);
    let month = ((month - 1).rem_euclid(12) + 1) as u32;

    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid date");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid date");

    next.signed_duration_since(first).num_days() as u32
}

/// The seven dates of the Sunday-to-Saturday week containing `date`,
/// Sunday at index 0. Spans month and year boundaries.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// Week rows of the month containing `date`. Each row has seven cells,
/// `None` padding days that belong to the adjacent months.
pub fn weeks_of_month(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let days = days_in_month(date.year(), date.month() as i32);
    let first = date.with_day(1).expect("valid date");
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<u32>> = vec![None; leading];
    cells.extend((1..=days).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells.chunks(7).map(|week| std::array::from_fn(|i| week[i])).collect()
}

/// Week label `"<year>년 <month>월 <n>주"`, governed by the Thursday of the
/// week containing `date`: year/month are the Thursday's, and `n` is the
/// Thursday's 1-indexed row in that month's [`weeks_of_month`] grid.
pub fn format_week(date: NaiveDate) -> String {
    let thursday = week_dates(date)[4];
    let day = thursday.day();

    let ordinal = weeks_of_month(thursday)
        .iter()
        .position(|row| row.contains(&Some(day)))
        .expect("thursday appears in its own month grid")
        + 1;

    format!("{}년 {}월 {}주", thursday.year(), thursday.month(), ordinal)
}

/// Month label `"<year>년 <month>월"` for the month containing `date`.
pub fn format_month(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Format as `YYYY-MM-DD`, optionally substituting the day component.
pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    match day {
        Some(d) => format!("{:04}-{:02}-{:02}", date.year(), date.month(), d),
        None => date.format("%Y-%m-%d").to_string(),
    }
}

/// Inclusive range test. Always false when `start > end`.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_days_in_month_regular_months() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 4), 30);
    }

    #[test]
    fn test_days_in_month_february_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        // Centuries are leap years only when divisible by 400
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_days_in_month_wraps_out_of_range_months() {
        // Month 0 is December of the previous year, month 13 is January of
        // the next; both are 31-day months.
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 13), 31);
    }

    #[test]
    fn test_week_dates_mid_week() {
        // 2024-10-09 is a Wednesday
        let week = week_dates(date("2024-10-09"));
        let expected: Vec<NaiveDate> = (6..=12)
            .map(|d| NaiveDate::from_ymd_opt(2024, 10, d).unwrap())
            .collect();
        assert_eq!(week.to_vec(), expected);
    }

    #[test]
    fn test_week_dates_on_sunday_and_saturday() {
        assert_eq!(week_dates(date("2024-10-06"))[0], date("2024-10-06"));
        assert_eq!(week_dates(date("2024-10-12"))[0], date("2024-10-06"));
        assert_eq!(week_dates(date("2024-10-12"))[6], date("2024-10-12"));
    }

    #[test]
    fn test_week_dates_crosses_year_end() {
        let week = week_dates(date("2024-12-30"));
        assert_eq!(week[0], date("2024-12-29"));
        assert_eq!(week[3], date("2025-01-01"));
        assert_eq!(week[6], date("2025-01-04"));
    }

    #[test]
    fn test_week_dates_crosses_year_start() {
        let week = week_dates(date("2024-01-01"));
        assert_eq!(week[0], date("2023-12-31"));
        assert_eq!(week[6], date("2024-01-06"));
    }

    #[test]
    fn test_week_dates_includes_leap_day() {
        let week = week_dates(date("2024-02-29"));
        assert_eq!(week[0], date("2024-02-25"));
        assert_eq!(week[4], date("2024-02-29"));
        assert_eq!(week[6], date("2024-03-02"));
    }

    #[test]
    fn test_week_dates_crosses_month_end() {
        let week = week_dates(date("2024-09-30"));
        assert_eq!(week[0], date("2024-09-29"));
        assert_eq!(week[6], date("2024-10-05"));
    }

    #[test]
    fn test_week_dates_always_starts_on_sunday_and_contains_input() {
        for day in 1..=31 {
            let d = NaiveDate::from_ymd_opt(2024, 7, day).unwrap();
            let week = week_dates(d);
            assert_eq!(week[0].weekday(), chrono::Weekday::Sun);
            assert!(week.contains(&d));
            for pair in week.windows(2) {
                assert_eq!(pair[1], pair[0] + Duration::days(1));
            }
        }
    }

    #[test]
    fn test_weeks_of_month_july_2024() {
        let weeks = weeks_of_month(date("2024-07-01"));
        assert_eq!(
            weeks,
            vec![
                [None, Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)],
                [Some(7), Some(8), Some(9), Some(10), Some(11), Some(12), Some(13)],
                [Some(14), Some(15), Some(16), Some(17), Some(18), Some(19), Some(20)],
                [Some(21), Some(22), Some(23), Some(24), Some(25), Some(26), Some(27)],
                [Some(28), Some(29), Some(30), Some(31), None, None, None],
            ]
        );
    }

    #[test]
    fn test_weeks_of_month_flattens_to_full_month() {
        for month in 1..=12 {
            let d = NaiveDate::from_ymd_opt(2024, month, 15).unwrap();
            let flat: Vec<u32> = weeks_of_month(d)
                .into_iter()
                .flatten()
                .flatten()
                .collect();
            let expected: Vec<u32> = (1..=days_in_month(2024, month as i32)).collect();
            assert_eq!(flat, expected);
        }
    }

    #[test]
    fn test_format_week_within_month() {
        assert_eq!(format_week(date("2024-10-14")), "2024년 10월 3주");
        assert_eq!(format_week(date("2024-10-01")), "2024년 10월 1주");
        assert_eq!(format_week(date("2024-10-31")), "2024년 10월 5주");
    }

    #[test]
    fn test_format_week_year_rollover_belongs_to_thursday_month() {
        assert_eq!(format_week(date("2024-12-31")), "2025년 1월 1주");
    }

    #[test]
    fn test_format_week_leap_february() {
        assert_eq!(format_week(date("2024-02-29")), "2024년 2월 5주");
    }

    #[test]
    fn test_format_week_common_february_rolls_to_march() {
        assert_eq!(format_week(date("2023-02-28")), "2023년 3월 1주");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month(date("2024-07-10")), "2024년 7월");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date("2024-07-01"), None), "2024-07-01");
        assert_eq!(format_date(date("2024-07-01"), Some(20)), "2024-07-20");
        assert_eq!(format_date(date("2024-11-01"), None), "2024-11-01");
    }

    #[test]
    fn test_is_date_in_range_inclusive_bounds() {
        let start = date("2024-07-01");
        let end = date("2024-07-31");

        assert!(is_date_in_range(date("2024-07-10"), start, end));
        assert!(is_date_in_range(start, start, end));
        assert!(is_date_in_range(end, start, end));
        assert!(!is_date_in_range(date("2024-06-30"), start, end));
        assert!(!is_date_in_range(date("2024-08-01"), start, end));
    }

    #[test]
    fn test_is_date_in_range_inverted_bounds_always_false() {
        let start = date("2024-07-31");
        let end = date("2024-07-01");
        for day in 1..=31 {
            let d = NaiveDate::from_ymd_opt(2024, 7, day).unwrap();
            assert!(!is_date_in_range(d, start, end));
        }
    }
}
