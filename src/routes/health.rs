use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::response::ok;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthData {
    status: &'static str,
    message: &'static str,
    timestamp: String,
    version: &'static str,
    database: &'static str,
    uptime_seconds: u64,
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.pool())
        .await
    {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    ok(HealthData {
        status: "ok",
        message: "GitHub Master Study App API is running",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        database,
        uptime_seconds: state.uptime_seconds(),
    })
}
