use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use tracing::info;

use crate::models::{CreateStudentRequest, Created};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::created;

pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let student = request.validate()?;

    let id = state.store.create_student(&student).await?;
    info!(student_id = id, college_id = student.college_id, "Student created");

    Ok(created(Created {
        message: "Student created successfully",
        id,
    }))
}
