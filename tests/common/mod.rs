#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use gitmaster_backend::db;

/// App over a throwaway database. The temp dir is held so the database file
/// lives as long as the harness.
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    _tmp: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let tmp = TempDir::new().expect("create temp dir");
    let pool = db::init_pool(&tmp.path().join("test.db"))
        .await
        .expect("init test database");

    let app = gitmaster_backend::create_app(pool.clone(), std::path::Path::new("public"));

    TestApp {
        app,
        pool,
        _tmp: tmp,
    }
}

pub fn unique_user() -> String {
    format!("user_{}", uuid::Uuid::new_v4().simple())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_json(response).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

/// Registers a user and reports back its id.
pub async fn init_user(app: &Router) -> String {
    let user_id = unique_user();
    let (status, body) = post_json(
        app,
        "/api/user/init",
        serde_json::json!({ "user_id": &user_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "init failed: {body}");
    user_id
}
