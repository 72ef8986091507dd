use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use tracing::info;

use crate::models::{CreateEventRequest, Created, EventQuery};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, ok};

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let event = request.validate()?;

    let id = state.store.create_event(&event).await?;
    info!(
        event_id = id,
        college_id = event.college_id,
        capacity = event.capacity,
        "Event created"
    );

    Ok(created(Created {
        message: "Event created successfully",
        id,
    }))
}

pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<EventQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;

    let events = state.store.list_events(&filter).await?;

    Ok(ok(events))
}
