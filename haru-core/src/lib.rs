//! Core calendar logic for haru.
//!
//! This crate holds everything that must be correct independent of any UI:
//! - `dates` for calendar arithmetic (month grids, week boundaries, labels)
//! - `query` for day/search/view filtering of events
//! - `overlap` for time-interval conflict detection
//! - `notify` and `scheduler` for due-notification computation and the
//!   exactly-once alert state
//!
//! plus the shared [`Event`] types, input validation, the options
//! enumerations and the JSON file store used by haru-server.

pub mod clock;
pub mod config;
pub mod dates;
pub mod error;
pub mod event;
pub mod holiday;
pub mod notify;
pub mod overlap;
pub mod query;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{HaruError, HaruResult};
pub use event::{Event, EventForm, Repeat, RepeatType};
pub use query::View;
pub use scheduler::{Alert, Notifier};
