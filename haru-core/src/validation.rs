//! Input validation for event drafts.
//!
//! Validation runs at the caller's boundary, before the overlap detector,
//! which assumes well-formed candidates. Date/time well-formedness is by
//! construction on the typed form; the string parsers below are for the
//! boundary itself.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::error::{HaruError, HaruResult};
use crate::event::EventForm;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("필수 정보를 모두 입력해주세요.")]
    EmptyTitle,
    /// Equal start/end times are invalid too; the ordering is strict.
    #[error("시작 시간은 종료 시간보다 빨라야 합니다.")]
    StartNotBeforeEnd,
}

/// Check the required fields and time ordering of a draft.
pub fn validate(form: &EventForm) -> Result<(), ValidationError> {
    if form.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if form.start_time >= form.end_time {
        return Err(ValidationError::StartNotBeforeEnd);
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> HaruResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| HaruError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` 24-hour wall-clock time.
pub fn parse_time(s: &str) -> HaruResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| HaruError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Repeat;

    fn form(title: &str, start: &str, end: &str) -> EventForm {
        EventForm {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            start_time: parse_time(start).unwrap(),
            end_time: parse_time(end).unwrap(),
            description: String::new(),
            location: String::new(),
            category: "업무".to_string(),
            repeat: Repeat::none(),
            notification_time: 10,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&form("회의", "13:00", "13:10")), Ok(()));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        assert_eq!(validate(&form("", "13:00", "13:10")), Err(ValidationError::EmptyTitle));
        assert_eq!(validate(&form("   ", "13:00", "13:10")), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        assert_eq!(
            validate(&form("회의", "13:10", "13:00")),
            Err(ValidationError::StartNotBeforeEnd)
        );
    }

    #[test]
    fn test_equal_times_are_rejected() {
        assert_eq!(
            validate(&form("회의", "13:00", "13:00")),
            Err(ValidationError::StartNotBeforeEnd)
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-07-01").unwrap(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert!(matches!(parse_date("2024-13-01"), Err(HaruError::InvalidDate(_))));
        assert!(matches!(parse_date("not-a-date"), Err(HaruError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert!(matches!(parse_time("25:00"), Err(HaruError::InvalidTime(_))));
        assert!(matches!(parse_time("0930"), Err(HaruError::InvalidTime(_))));
    }
}
