use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::content::QuizType;
use crate::db::operations::quiz;
use crate::response::{ok, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit_answer))
        .route("/stats/:user_id", get(quiz_stats))
        .route("/:quiz_type", get(get_questions))
        .route("/:quiz_type/results/:user_id", get(quiz_results))
}

async fn get_questions(
    State(state): State<AppState>,
    Path(quiz_type): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let quiz: QuizType = quiz_type
        .parse()
        .map_err(|_| ApiError::not_found("Quiz type not found"))?;

    Ok(ok(state.content().questions(quiz).to_vec()))
}

#[derive(Deserialize)]
struct SubmitAnswerBody {
    user_id: Option<String>,
    quiz_type: Option<String>,
    question_id: Option<String>,
    answer: Option<i64>,
    #[serde(default)]
    time_spent: i64,
}

#[derive(Serialize)]
struct SubmitAnswerData {
    is_correct: bool,
    explanation: &'static str,
    correct_answer: i64,
    points: i64,
}

async fn submit_answer(
    State(state): State<AppState>,
    Json(body): Json<SubmitAnswerBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(user_id), Some(quiz_type), Some(question_id), Some(answer)) =
        (body.user_id, body.quiz_type, body.question_id, body.answer)
    else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let quiz: QuizType = quiz_type
        .parse()
        .map_err(|_| ApiError::not_found("Quiz type not found"))?;
    let question = state
        .content()
        .question(quiz, &question_id)
        .ok_or_else(|| ApiError::not_found("Question not found"))?;

    let is_correct = answer == question.correct_answer;
    quiz::submit_answer(
        state.pool(),
        &user_id,
        quiz.as_str(),
        &question_id,
        answer,
        is_correct,
        body.time_spent,
    )
    .await?;

    Ok(ok(SubmitAnswerData {
        is_correct,
        explanation: question.explanation,
        correct_answer: question.correct_answer,
        points: if is_correct { question.points } else { 0 },
    }))
}

#[derive(Serialize)]
struct QuizResultsData {
    results: Vec<quiz::QuizResultRow>,
    score: i64,
    correct_answers: i64,
    total_questions: i64,
}

async fn quiz_results(
    State(state): State<AppState>,
    Path((quiz_type, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let quiz_kind: QuizType = quiz_type
        .parse()
        .map_err(|_| ApiError::not_found("Quiz type not found"))?;

    let results = quiz::results(state.pool(), &user_id, quiz_kind.as_str()).await?;

    let correct_answers = results.iter().filter(|r| r.is_correct).count() as i64;
    let total_questions = state.content().questions(quiz_kind).len() as i64;
    let score = if total_questions > 0 {
        (correct_answers as f64 / total_questions as f64 * 100.0).round() as i64
    } else {
        0
    };

    Ok(ok(QuizResultsData {
        results,
        score,
        correct_answers,
        total_questions,
    }))
}

async fn quiz_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = quiz::stats_by_type(state.pool(), &user_id).await?;
    let by_type: HashMap<String, quiz::QuizTypeStats> = rows.into_iter().collect();

    let mut formatted = HashMap::new();
    for quiz_kind in QuizType::ALL {
        let mut stats = by_type.get(quiz_kind.as_str()).copied().unwrap_or_default();
        stats.total = state.content().questions(quiz_kind).len() as i64;
        formatted.insert(quiz_kind.as_str(), stats);
    }

    Ok(ok(formatted))
}
