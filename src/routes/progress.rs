use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::content::CourseType;
use crate::db::operations::{achievements, progress};
use crate::response::{ok, ok_with_message, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lesson", post(update_lesson_progress))
        .route("/study-time", post(update_study_time))
        .route("/achievement", post(award_achievement))
        .route("/:user_id/achievements", get(list_achievements))
        .route("/:user_id/:course_type", get(course_progress))
}

#[derive(Deserialize)]
struct LessonProgressBody {
    user_id: Option<String>,
    course_type: Option<String>,
    lesson_id: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    time_spent: i64,
}

async fn update_lesson_progress(
    State(state): State<AppState>,
    Json(body): Json<LessonProgressBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(user_id), Some(course_type), Some(lesson_id)) =
        (body.user_id, body.course_type, body.lesson_id)
    else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let course: CourseType = course_type
        .parse()
        .map_err(|_| ApiError::not_found("Course type not found"))?;
    if state.content().lesson(&lesson_id).is_none() {
        return Err(ApiError::not_found("Lesson not found"));
    }

    progress::record_lesson_progress(
        state.pool(),
        &user_id,
        course.as_str(),
        &lesson_id,
        body.completed,
        body.time_spent,
    )
    .await?;

    Ok(ok_with_message("Progress updated successfully", ()))
}

async fn course_progress(
    State(state): State<AppState>,
    Path((user_id, course_type)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let course: CourseType = course_type
        .parse()
        .map_err(|_| ApiError::not_found("Course type not found"))?;

    let rows = progress::course_progress(state.pool(), &user_id, course.as_str()).await?;
    Ok(ok(rows))
}

#[derive(Deserialize)]
struct StudyTimeBody {
    user_id: Option<String>,
    time_spent: Option<i64>,
}

async fn update_study_time(
    State(state): State<AppState>,
    Json(body): Json<StudyTimeBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(user_id), Some(time_spent)) = (body.user_id, body.time_spent) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let updated = progress::add_study_time(state.pool(), &user_id, time_spent).await?;
    if !updated {
        return Err(ApiError::not_found("User not found"));
    }

    Ok(ok_with_message("Study time updated successfully", ()))
}

#[derive(Deserialize)]
struct AchievementBody {
    user_id: Option<String>,
    achievement_type: Option<String>,
    achievement_data: Option<String>,
}

async fn award_achievement(
    State(state): State<AppState>,
    Json(body): Json<AchievementBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(user_id), Some(achievement_type)) = (body.user_id, body.achievement_type) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let (row, created) = achievements::grant(
        state.pool(),
        &user_id,
        &achievement_type,
        body.achievement_data.as_deref(),
    )
    .await?;

    let message = if created {
        "Achievement awarded successfully"
    } else {
        "Achievement already earned"
    };

    Ok(ok_with_message(message, row))
}

async fn list_achievements(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = achievements::list(state.pool(), &user_id).await?;
    Ok(ok(rows))
}
