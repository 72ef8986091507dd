use axum::response::Response;
use serde::Serialize;

use crate::utils::response::ok;

pub mod colleges;
pub mod events;
pub mod participation;
pub mod reports;
pub mod students;

pub use colleges::create_college;
pub use events::{create_event, list_events};
pub use participation::{mark_attendance, register_for_event, submit_feedback};
pub use reports::{event_popularity_report, student_participation_report, top_students_report};
pub use students::create_student;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    ok(HealthPayload {
        status: "ok",
        service: "campus-events-api",
    })
}
