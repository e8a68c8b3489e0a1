pub mod config;
pub mod content;
pub mod db;
pub mod logging;
pub mod response;
pub mod routes;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::content::ContentStore;
use crate::state::AppState;

/// Builds the full application over an already-initialized pool. Tests call
/// this directly against a temp database.
pub fn create_app(pool: SqlitePool, asset_dir: &Path) -> axum::Router {
    let state = AppState::new(pool, Arc::new(ContentStore::new()));

    routes::router(state, asset_dir)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
