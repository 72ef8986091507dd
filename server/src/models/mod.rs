//! Request, response and row types for the campus events API.
//!
//! Incoming bodies deserialize into `*Request` structs whose fields are all
//! optional, then `validate()` turns them into the `New*` records the store
//! accepts. Missing fields therefore surface as `AppError::ValidationError`
//! with a readable message instead of a serde rejection.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

pub mod college;
pub mod event;
pub mod registration;
pub mod report;
pub mod student;

pub use college::{CreateCollegeRequest, NewCollege};
pub use event::{CreateEventRequest, EventFilter, EventListing, EventQuery, NewEvent};
pub use registration::{FeedbackRequest, NewFeedback, RegisterRequest};
pub use report::{EventReport, StudentReport};
pub use student::{CreateStudentRequest, NewStudent};

/// Body returned by the plain create endpoints (colleges, students, events).
#[derive(Debug, Serialize)]
pub struct Created {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct RegistrationCreated {
    pub message: &'static str,
    pub registration_id: i64,
}

#[derive(Debug, Serialize)]
pub struct AttendanceMarked {
    pub message: &'static str,
    pub attendance_id: i64,
}

#[derive(Debug, Serialize)]
pub struct FeedbackSubmitted {
    pub message: &'static str,
    pub feedback_id: i64,
}

/// Layout SQLite uses for `CURRENT_TIMESTAMP`.
const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Serializes timestamps the way they are stored, e.g. `2024-12-15 09:30:00`.
pub(crate) fn sqlite_timestamp<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(SQLITE_TIMESTAMP))
}

/// Treats absent, null and blank strings alike.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
