use std::sync::Arc;
use std::time::Instant;

use sqlx::SqlitePool;

use crate::content::ContentStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    pool: SqlitePool,
    content: Arc<ContentStore>,
}

impl AppState {
    pub fn new(pool: SqlitePool, content: Arc<ContentStore>) -> Self {
        Self {
            started_at: Instant::now(),
            pool,
            content,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
