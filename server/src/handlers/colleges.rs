use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use tracing::info;

use crate::models::{CreateCollegeRequest, Created};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::created;

pub async fn create_college(
    State(state): State<AppState>,
    payload: Result<Json<CreateCollegeRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let college = request.validate()?;

    let id = state.store.create_college(&college).await?;
    info!(college_id = id, name = %college.name, "College created");

    Ok(created(Created {
        message: "College created successfully",
        id,
    }))
}
