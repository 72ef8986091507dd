use async_trait::async_trait;

use crate::models::{
    EventFilter, EventListing, EventReport, NewCollege, NewEvent, NewFeedback, NewStudent,
    StudentReport,
};
use crate::utils::error::AppError;

pub const EVENT_NOT_FOUND: &str = "Event not found";
pub const EVENT_FULL: &str = "Event is at full capacity";
pub const ALREADY_REGISTERED: &str = "Student already registered for this event";
pub const REGISTRATION_NOT_FOUND: &str = "Registration not found";
pub const ATTENDANCE_ALREADY_MARKED: &str = "Attendance already marked";
pub const FEEDBACK_ALREADY_SUBMITTED: &str = "Feedback already submitted";
pub const EMAIL_TAKEN: &str = "Email already exists";

/// Persistence seam for the API handlers.
///
/// Every method is a complete unit of work: write operations either insert
/// exactly one row and return its id, or fail with a domain error
/// (`NotFound`, `Conflict`, `Capacity`) without side effects.
#[async_trait]
pub trait CampusStore: Send + Sync {
    async fn create_college(&self, college: &NewCollege) -> Result<i64, AppError>;

    /// Fails with `Conflict` when the email is already in use.
    async fn create_student(&self, student: &NewStudent) -> Result<i64, AppError>;

    async fn create_event(&self, event: &NewEvent) -> Result<i64, AppError>;

    /// Events with their college name and live registration count, ordered by
    /// `event_date` ascending.
    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<EventListing>, AppError>;

    /// Checks, in order: event exists, event has a free seat, the student is
    /// not already registered.
    async fn register_student(&self, event_id: i64, student_id: i64) -> Result<i64, AppError>;

    async fn mark_attendance(&self, registration_id: i64) -> Result<i64, AppError>;

    async fn submit_feedback(
        &self,
        registration_id: i64,
        feedback: &NewFeedback,
    ) -> Result<i64, AppError>;

    /// Ordered by total registrations, descending.
    async fn event_popularity(&self) -> Result<Vec<EventReport>, AppError>;

    /// Ordered by total registrations, descending.
    async fn student_participation(&self) -> Result<Vec<StudentReport>, AppError>;

    /// The first `limit` rows of [`CampusStore::student_participation`]. Ties
    /// on registration count keep storage order.
    async fn top_students(&self, limit: u32) -> Result<Vec<StudentReport>, AppError>;
}
