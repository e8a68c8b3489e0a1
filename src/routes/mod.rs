mod health;
mod lessons;
mod practice;
mod progress;
mod quiz;
mod users;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::services::ServeDir;

use crate::response::ErrorResponse;
use crate::state::AppState;

/// `/api/*` handlers plus the static client. Anything under `/api` that no
/// route matches gets the JSON NotFound envelope instead of ServeDir's 404.
pub fn router(state: AppState, asset_dir: &std::path::Path) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .nest("/user", users::router())
        .nest("/lessons", lessons::router())
        .nest("/quiz", quiz::router())
        .nest("/practice", practice::router())
        .nest("/progress", progress::router())
        .fallback(fallback_handler);

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(asset_dir).append_index_html_on_directories(true))
        .with_state(state)
}

async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Route not found".to_string(),
            message: None,
        }),
    )
        .into_response()
}
