use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer, Config};
use crate::handlers::{
    create_college, create_event, create_student, event_popularity_report, health_check,
    list_events, mark_attendance, register_for_event, student_participation_report,
    submit_feedback, top_students_report,
};
use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/colleges", post(create_college))
        .route("/students", post(create_student))
        .route("/events", get(list_events).post(create_event))
        .route("/events/:event_id/register", post(register_for_event))
        .route("/attendance/:registration_id", post(mark_attendance))
        .route("/feedback/:registration_id", post(submit_feedback))
        .route("/reports/events", get(event_popularity_report))
        .route("/reports/students", get(student_participation_report))
        .route("/reports/top-students", get(top_students_report))
}

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let router: Router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state);

    apply_security_headers(router, config.production)
        .layer(create_cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
}
