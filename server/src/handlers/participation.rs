//! Registration, attendance check-in and feedback, all keyed by path ids.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use tracing::info;

use crate::models::{
    AttendanceMarked, FeedbackRequest, FeedbackSubmitted, RegisterRequest, RegistrationCreated,
};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::created;

pub async fn register_for_event(
    State(state): State<AppState>,
    event_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(event_id) = event_id?;
    let Json(request) = payload?;
    let student_id = request.student_id()?;

    let registration_id = state.store.register_student(event_id, student_id).await?;
    info!(registration_id, event_id, student_id, "Student registered");

    Ok(created(RegistrationCreated {
        message: "Student registered successfully",
        registration_id,
    }))
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    registration_id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(registration_id) = registration_id?;

    let attendance_id = state.store.mark_attendance(registration_id).await?;
    info!(attendance_id, registration_id, "Attendance marked");

    Ok(created(AttendanceMarked {
        message: "Attendance marked successfully",
        attendance_id,
    }))
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    registration_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(registration_id) = registration_id?;
    let Json(request) = payload?;
    let feedback = request.validate()?;

    let feedback_id = state
        .store
        .submit_feedback(registration_id, &feedback)
        .await?;
    info!(feedback_id, registration_id, rating = feedback.rating, "Feedback submitted");

    Ok(created(FeedbackSubmitted {
        message: "Feedback submitted successfully",
        feedback_id,
    }))
}
