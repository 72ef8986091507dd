use serde::Serialize;
use sqlx::FromRow;

/// One row of the event popularity report.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventReport {
    pub id: i64,
    pub title: String,
    pub event_type: String,
    pub event_date: String,
    pub college_name: Option<String>,
    pub total_registrations: i64,
    pub total_attendance: i64,
    /// Mean feedback rating rounded to two decimals; `None` without feedback.
    pub avg_rating: Option<f64>,
}

/// One row of the student participation and top-students reports.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudentReport {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub college_name: Option<String>,
    pub total_registrations: i64,
    pub total_attendance: i64,
    pub avg_rating: Option<f64>,
}
