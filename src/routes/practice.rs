use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::content::PracticeType;
use crate::db::operations::practice;
use crate::response::{ok, ok_with_message, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(record_session))
        .route("/sessions/:user_id", get(list_sessions))
        .route("/stats/:user_id", get(practice_stats))
        .route("/validate", post(validate_command))
        .route("/:practice_type", get(get_exercises))
        .route("/:practice_type/:exercise_id", get(get_exercise))
}

async fn get_exercises(
    State(state): State<AppState>,
    Path(practice_type): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let practice_kind: PracticeType = practice_type
        .parse()
        .map_err(|_| ApiError::not_found("Practice type not found"))?;

    Ok(ok(state.content().exercises(practice_kind).to_vec()))
}

async fn get_exercise(
    State(state): State<AppState>,
    Path((practice_type, exercise_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let practice_kind: PracticeType = practice_type
        .parse()
        .map_err(|_| ApiError::not_found("Practice type not found"))?;
    let exercise = state
        .content()
        .exercise(practice_kind, &exercise_id)
        .ok_or_else(|| ApiError::not_found("Exercise not found"))?;

    Ok(ok(exercise.clone()))
}

#[derive(Deserialize)]
struct RecordSessionBody {
    user_id: Option<String>,
    practice_type: Option<String>,
    exercise_id: Option<String>,
    #[serde(default)]
    session_data: serde_json::Value,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    time_spent: i64,
}

#[derive(Serialize)]
struct RecordSessionData {
    id: i64,
}

async fn record_session(
    State(state): State<AppState>,
    Json(body): Json<RecordSessionBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(user_id), Some(practice_type), Some(exercise_id)) =
        (body.user_id, body.practice_type, body.exercise_id)
    else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let practice_kind: PracticeType = practice_type
        .parse()
        .map_err(|_| ApiError::not_found("Practice type not found"))?;

    // The exercise id rides along inside session_data, as the client expects.
    let mut session_data = serde_json::Map::new();
    session_data.insert("exercise_id".to_string(), exercise_id.into());
    if let serde_json::Value::Object(extra) = body.session_data {
        session_data.extend(extra);
    }
    let session_json = serde_json::Value::Object(session_data).to_string();

    let id = practice::insert_session(
        state.pool(),
        &user_id,
        practice_kind.as_str(),
        &session_json,
        body.completed,
        body.time_spent,
    )
    .await?;

    Ok(ok_with_message(
        "Practice session recorded successfully",
        RecordSessionData { id },
    ))
}

#[derive(Deserialize)]
struct SessionsQuery {
    #[serde(rename = "type")]
    practice_type: Option<String>,
}

async fn list_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<SessionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = match &query.practice_type {
        Some(raw) => Some(
            raw.parse::<PracticeType>()
                .map_err(|_| ApiError::not_found("Practice type not found"))?,
        ),
        None => None,
    };

    let sessions =
        practice::sessions(state.pool(), &user_id, filter.map(|kind| kind.as_str())).await?;

    Ok(ok(sessions))
}

async fn practice_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = practice::stats_by_type(state.pool(), &user_id).await?;
    let by_type: HashMap<String, practice::PracticeTypeStats> = rows.into_iter().collect();

    let mut formatted = HashMap::new();
    for kind in PracticeType::ALL {
        let stats = by_type.get(kind.as_str()).copied().unwrap_or_default();
        formatted.insert(kind.as_str(), stats);
    }

    Ok(ok(formatted))
}

#[derive(Deserialize)]
struct ValidateBody {
    command: Option<String>,
    expected_commands: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ValidateData {
    is_correct: bool,
    feedback: String,
    expected: Vec<String>,
}

async fn validate_command(
    Json(body): Json<ValidateBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(command), Some(expected_commands)) = (body.command, body.expected_commands) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let is_correct = command_matches(&command, &expected_commands);
    let feedback = if is_correct {
        "✅ 正解です！次のステップに進みましょう。"
    } else {
        "❌ コマンドが正しくないようです。ヒントを確認してもう一度試してください。"
    };

    Ok(ok(ValidateData {
        is_correct,
        feedback: feedback.to_string(),
        expected: expected_commands,
    }))
}

fn normalize_command(command: &str) -> String {
    command
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Loose textual match: exact, or substring containment in either direction.
/// Good enough for self-reported practice; this is not a shell parser.
fn command_matches(input: &str, expected: &[String]) -> bool {
    let normalized_input = normalize_command(input);
    expected.iter().any(|candidate| {
        let normalized_expected = normalize_command(candidate);
        normalized_input == normalized_expected
            || normalized_input.contains(&normalized_expected)
            || normalized_expected.contains(&normalized_input)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_collapses_case_and_whitespace() {
        assert_eq!(normalize_command("  Git   INIT  "), "git init");
        assert_eq!(normalize_command("git\tstatus"), "git status");
    }

    #[test]
    fn exact_match_after_normalization() {
        let expected = vec!["git init".to_string()];
        assert!(command_matches("  GIT  init ", &expected));
        assert!(!command_matches("git commit", &expected));
    }

    #[test]
    fn substring_containment_matches_both_directions() {
        let expected = vec!["git commit -m \"Initial commit\"".to_string()];
        // input extends the expected command
        assert!(command_matches("git commit -m \"initial commit\" --verbose", &expected));
        // input is a prefix fragment of the expected command
        assert!(command_matches("git commit", &expected));
    }
}
