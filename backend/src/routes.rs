use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{courses, health, webinars};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Course routes
        .route(
            "/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        // Webinar routes
        .route(
            "/webinars",
            get(webinars::list_webinars).post(webinars::create_webinar),
        )
}

/// Health check plus the API under `/api`, with request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
