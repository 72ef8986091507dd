use axum::extract::State;
use axum::response::Response;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ok;

pub const TOP_STUDENTS_LIMIT: u32 = 3;

pub async fn event_popularity_report(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(ok(state.store.event_popularity().await?))
}

pub async fn student_participation_report(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    Ok(ok(state.store.student_participation().await?))
}

pub async fn top_students_report(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(ok(state.store.top_students(TOP_STUDENTS_LIMIT).await?))
}
