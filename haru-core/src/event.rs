//! Event types shared by the haru CLI and server.
//!
//! The serde representation matches the JSON wire format of the event store:
//! camelCase keys, `YYYY-MM-DD` dates and `HH:MM` times.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HaruError;

/// Recurrence frequency. `None` is the canonical non-recurring marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for RepeatType {
    type Err = HaruError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            other => Err(HaruError::InvalidRepeatType(other.to_string())),
        }
    }
}

/// Recurrence descriptor. Data-only: events carry it but no instance
/// expansion is performed anywhere in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeat {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    /// Only meaningful when `repeat_type` is not `None`.
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Repeat {
    pub fn none() -> Self {
        Repeat {
            repeat_type: RepeatType::None,
            interval: 0,
            end_date: None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.repeat_type != RepeatType::None
    }
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::none()
    }
}

/// A persisted calendar event. Identity is `id`, assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: Repeat,
    /// Minutes before `start_time` at which to alert.
    #[serde(default)]
    pub notification_time: i64,
}

/// A not-yet-persisted event draft: an [`Event`] without an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: Repeat,
    #[serde(default)]
    pub notification_time: i64,
}

impl Event {
    pub fn from_form(id: impl Into<String>, form: EventForm) -> Self {
        Event {
            id: id.into(),
            title: form.title,
            date: form.date,
            start_time: form.start_time,
            end_time: form.end_time,
            description: form.description,
            location: form.location,
            category: form.category,
            repeat: form.repeat,
            notification_time: form.notification_time,
        }
    }

    /// Build a persisted event from a draft with a fresh v4 uuid.
    pub fn with_new_id(form: EventForm) -> Self {
        Event::from_form(Uuid::new_v4().to_string(), form)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    pub fn to_form(&self) -> EventForm {
        EventForm {
            title: self.title.clone(),
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            repeat: self.repeat.clone(),
            notification_time: self.notification_time,
        }
    }
}

impl EventForm {
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }
}

/// Serde codec for `HH:MM` wall-clock times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
