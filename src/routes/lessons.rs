use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::content::{CourseType, LessonMeta};
use crate::response::{ok, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_lessons))
        .route("/course/:course_type", get(course_lessons))
        .route("/:lesson_id", get(get_lesson))
}

async fn list_lessons(State(state): State<AppState>) -> impl IntoResponse {
    let lessons: Vec<LessonMeta> = state
        .content()
        .lessons()
        .iter()
        .map(|lesson| lesson.meta())
        .collect();

    ok(lessons)
}

async fn get_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let lesson = state
        .content()
        .lesson(&lesson_id)
        .ok_or_else(|| ApiError::not_found("Lesson not found"))?;

    Ok(ok(lesson.clone()))
}

async fn course_lessons(
    State(state): State<AppState>,
    Path(course_type): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let course: CourseType = course_type
        .parse()
        .map_err(|_| ApiError::not_found("Course type not found"))?;

    let lessons: Vec<_> = state
        .content()
        .course_lessons(course)
        .into_iter()
        .cloned()
        .collect();

    Ok(ok(lessons))
}
