use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::operations::user;
use crate::response::{ok, ok_with_message, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/init", post(init_user))
        .route("/import", post(import_user))
        .route("/:user_id/summary", get(user_summary))
        .route("/:user_id/export", get(export_user))
}

#[derive(Deserialize)]
struct InitUserBody {
    user_id: Option<String>,
}

async fn init_user(
    State(state): State<AppState>,
    Json(body): Json<InitUserBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = body
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("User ID is required"))?;

    let (stats, created) = user::init_user(state.pool(), &user_id).await?;
    let message = if created {
        "User initialized successfully"
    } else {
        "User already exists"
    };

    Ok(ok_with_message(message, stats))
}

async fn user_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = user::summarize(state.pool(), state.content(), &user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ok(summary))
}

async fn export_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let export = user::export_user(state.pool(), &user_id).await?;
    Ok(ok(export))
}

async fn import_user(
    State(state): State<AppState>,
    Json(payload): Json<user::UserExport>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = payload
        .user_stats
        .as_ref()
        .map(|stats| stats.user_id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("Import payload must contain user_stats.user_id"))?;

    let counts = user::import_user(state.pool(), &payload, &user_id).await?;
    tracing::info!(%user_id, "restored user data from import payload");

    Ok(ok_with_message("Data imported successfully", counts))
}
