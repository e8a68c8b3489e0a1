use axum::http::StatusCode;
use serde_json::json;

mod common;

// ---- health & routing --------------------------------------------------

#[tokio::test]
async fn health_reports_connected_database() {
    let harness = common::spawn_app().await;

    let (status, body) = common::get(&harness.app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("ok"));
    assert_eq!(body["data"]["database"], json!("connected"));
}

#[tokio::test]
async fn unknown_api_route_returns_envelope_404() {
    let harness = common::spawn_app().await;

    let (status, body) = common::get(&harness.app, "/api/no-such-thing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Route not found"));
}

// ---- user lifecycle ----------------------------------------------------

#[tokio::test]
async fn init_user_is_idempotent() {
    let harness = common::spawn_app().await;
    let user_id = common::unique_user();

    let (status, body) =
        common::post_json(&harness.app, "/api/user/init", json!({ "user_id": &user_id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("User initialized successfully"));
    assert_eq!(body["data"]["user_id"], json!(&user_id));
    assert_eq!(body["data"]["lessons_completed"], json!(0));

    let (status, body) =
        common::post_json(&harness.app, "/api/user/init", json!({ "user_id": &user_id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("User already exists"));
}

#[tokio::test]
async fn init_user_requires_user_id() {
    let harness = common::spawn_app().await;

    let (status, body) = common::post_json(&harness.app, "/api/user/init", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("User ID is required"));

    let (status, _) =
        common::post_json(&harness.app, "/api/user/init", json!({ "user_id": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summary_for_unknown_user_is_404() {
    let harness = common::spawn_app().await;

    let (status, body) = common::get(&harness.app, "/api/user/nobody/summary").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("User not found"));
}

// ---- lessons -----------------------------------------------------------

#[tokio::test]
async fn lessons_list_returns_metadata_without_content() {
    let harness = common::spawn_app().await;

    let (status, body) = common::get(&harness.app, "/api/lessons").await;
    assert_eq!(status, StatusCode::OK);
    let lessons = body["data"].as_array().unwrap();
    assert_eq!(lessons.len(), 8);
    assert!(lessons[0].get("content").is_none());
}

#[tokio::test]
async fn course_lessons_are_ordered() {
    let harness = common::spawn_app().await;

    let (status, body) = common::get(&harness.app, "/api/lessons/course/beginner").await;
    assert_eq!(status, StatusCode::OK);
    let lessons = body["data"].as_array().unwrap();
    assert_eq!(lessons.len(), 4);
    assert_eq!(lessons[0]["id"], json!("git-basics"));
    let orders: Vec<i64> = lessons
        .iter()
        .map(|lesson| lesson["order"].as_i64().unwrap())
        .collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();
    assert_eq!(orders, sorted);
}

#[tokio::test]
async fn lesson_detail_carries_content() {
    let harness = common::spawn_app().await;

    let (status, body) = common::get(&harness.app, "/api/lessons/git-basics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["course_type"], json!("beginner"));
    assert!(body["data"]["content"].as_str().unwrap().contains("Git"));

    let (status, body) = common::get(&harness.app, "/api/lessons/no-such-lesson").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Lesson not found"));

    let (status, _) = common::get(&harness.app, "/api/lessons/course/expert").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---- quiz --------------------------------------------------------------

#[tokio::test]
async fn quiz_question_counts_per_type() {
    let harness = common::spawn_app().await;

    for (quiz_type, expected) in [("basic", 10), ("commands", 15), ("workflow", 12)] {
        let (status, body) = common::get(&harness.app, &format!("/api/quiz/{quiz_type}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), expected);
    }

    let (status, body) = common::get(&harness.app, "/api/quiz/trivia").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Quiz type not found"));
}

#[tokio::test]
async fn correct_answer_scores_points_and_returns_explanation() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    let (status, body) = common::post_json(
        &harness.app,
        "/api/quiz/submit",
        json!({
            "user_id": &user_id,
            "quiz_type": "basic",
            "question_id": "q1_git_definition",
            "answer": 1,
            "time_spent": 12
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_correct"], json!(true));
    assert_eq!(body["data"]["correct_answer"], json!(1));
    assert_eq!(body["data"]["points"], json!(10));
    assert!(body["data"]["explanation"]
        .as_str()
        .unwrap()
        .contains("バージョン管理"));
}

#[tokio::test]
async fn wrong_answer_scores_zero_points() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    let (status, body) = common::post_json(
        &harness.app,
        "/api/quiz/submit",
        json!({
            "user_id": &user_id,
            "quiz_type": "basic",
            "question_id": "q1_git_definition",
            "answer": 0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_correct"], json!(false));
    assert_eq!(body["data"]["points"], json!(0));
}

#[tokio::test]
async fn resubmission_increments_attempts_and_overwrites_result() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    let submit = |answer: i64| {
        common::post_json(
            &harness.app,
            "/api/quiz/submit",
            json!({
                "user_id": &user_id,
                "quiz_type": "basic",
                "question_id": "q1_git_definition",
                "answer": answer
            }),
        )
    };
    submit(0).await;
    submit(1).await;

    let (status, body) = common::get(
        &harness.app,
        &format!("/api/quiz/basic/results/{user_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let results = body["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["attempts"], json!(2));
    assert_eq!(results[0]["is_correct"], json!(true));

    // 1 of 10 basic questions correct.
    assert_eq!(body["data"]["correct_answers"], json!(1));
    assert_eq!(body["data"]["total_questions"], json!(10));
    assert_eq!(body["data"]["score"], json!(10));
}

#[tokio::test]
async fn quiz_submit_validates_input() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    let (status, body) = common::post_json(
        &harness.app,
        "/api/quiz/submit",
        json!({ "user_id": &user_id, "quiz_type": "basic" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Missing required fields"));

    let (status, body) = common::post_json(
        &harness.app,
        "/api/quiz/submit",
        json!({
            "user_id": &user_id,
            "quiz_type": "basic",
            "question_id": "q999_missing",
            "answer": 0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Question not found"));
}

#[tokio::test]
async fn quiz_stats_carry_content_totals() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    let (status, body) =
        common::get(&harness.app, &format!("/api/quiz/stats/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["basic"]["total"], json!(10));
    assert_eq!(body["data"]["commands"]["total"], json!(15));
    assert_eq!(body["data"]["workflow"]["total"], json!(12));
    assert_eq!(body["data"]["basic"]["answered"], json!(0));
}

// ---- lesson progress & summary -----------------------------------------

async fn complete_lesson(app: &axum::Router, user_id: &str, lesson_id: &str) {
    let (status, _) = common::post_json(
        app,
        "/api/progress/lesson",
        json!({
            "user_id": &user_id,
            "course_type": "beginner",
            "lesson_id": lesson_id,
            "completed": true,
            "time_spent": 300
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn two_beginner_lessons_yield_fifty_percent_course_progress() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    complete_lesson(&harness.app, &user_id, "git-basics").await;
    complete_lesson(&harness.app, &user_id, "github-intro").await;

    let (status, body) =
        common::get(&harness.app, &format!("/api/user/{user_id}/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["beginner"], json!(50));
    assert_eq!(body["data"]["overall_progress"], json!(17));
    assert_eq!(body["data"]["lessons_completed"], json!(2));
}

#[tokio::test]
async fn repeated_completion_does_not_double_count() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    complete_lesson(&harness.app, &user_id, "git-basics").await;
    complete_lesson(&harness.app, &user_id, "git-basics").await;

    let (_, body) = common::get(&harness.app, &format!("/api/user/{user_id}/summary")).await;
    assert_eq!(body["data"]["lessons_completed"], json!(1));
    assert_eq!(body["data"]["beginner"], json!(25));

    let (status, body) = common::get(
        &harness.app,
        &format!("/api/progress/{user_id}/beginner"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn lesson_progress_rejects_unknown_identifiers() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    let (status, body) = common::post_json(
        &harness.app,
        "/api/progress/lesson",
        json!({
            "user_id": &user_id,
            "course_type": "expert",
            "lesson_id": "git-basics",
            "completed": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Course type not found"));

    let (status, _) = common::post_json(
        &harness.app,
        "/api/progress/lesson",
        json!({ "user_id": &user_id, "course_type": "beginner" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn study_time_accumulates_and_requires_known_user() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    for _ in 0..3 {
        let (status, _) = common::post_json(
            &harness.app,
            "/api/progress/study-time",
            json!({ "user_id": &user_id, "time_spent": 60 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = common::get(&harness.app, &format!("/api/user/{user_id}/summary")).await;
    assert_eq!(body["data"]["total_study_time"], json!(180));

    let (status, body) = common::post_json(
        &harness.app,
        "/api/progress/study-time",
        json!({ "user_id": "ghost", "time_spent": 60 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("User not found"));
}

// ---- achievements ------------------------------------------------------

#[tokio::test]
async fn achievement_grant_is_first_writer_wins() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    let grant = || {
        common::post_json(
            &harness.app,
            "/api/progress/achievement",
            json!({ "user_id": &user_id, "achievement_type": "first_lesson" }),
        )
    };

    let (status, first) = grant().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], json!("Achievement awarded successfully"));

    let (status, second) = grant().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["message"], json!("Achievement already earned"));
    assert_eq!(second["data"]["earned_at"], first["data"]["earned_at"]);

    let (_, body) = common::get(
        &harness.app,
        &format!("/api/progress/{user_id}/achievements"),
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

// ---- practice ----------------------------------------------------------

#[tokio::test]
async fn practice_exercises_grouped_by_type() {
    let harness = common::spawn_app().await;

    for practice_type in ["command", "branch", "pullrequest"] {
        let (status, body) =
            common::get(&harness.app, &format!("/api/practice/{practice_type}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    let (status, body) = common::get(&harness.app, "/api/practice/rebase").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Practice type not found"));

    let (status, body) =
        common::get(&harness.app, "/api/practice/command/basic-git-setup").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!("basic-git-setup"));
    assert!(!body["data"]["expected_commands"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn command_validation_accepts_loose_matches() {
    let harness = common::spawn_app().await;

    let (status, body) = common::post_json(
        &harness.app,
        "/api/practice/validate",
        json!({ "command": "git status", "expected_commands": ["git status"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_correct"], json!(true));
    assert!(body["data"]["feedback"].as_str().unwrap().contains("正解"));

    let (_, body) = common::post_json(
        &harness.app,
        "/api/practice/validate",
        json!({ "command": "git stash", "expected_commands": ["git status"] }),
    )
    .await;
    assert_eq!(body["data"]["is_correct"], json!(false));

    let (status, _) = common::post_json(
        &harness.app,
        "/api/practice/validate",
        json!({ "command": "git status" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn practice_sessions_append_and_count_every_completion() {
    let harness = common::spawn_app().await;
    let user_id = common::init_user(&harness.app).await;

    for _ in 0..2 {
        let (status, body) = common::post_json(
            &harness.app,
            "/api/practice/session",
            json!({
                "user_id": &user_id,
                "practice_type": "command",
                "exercise_id": "basic-git-setup",
                "completed": true,
                "time_spent": 120
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["id"].as_i64().unwrap() > 0);
    }

    let (_, body) = common::get(
        &harness.app,
        &format!("/api/practice/sessions/{user_id}?type=command"),
    )
    .await;
    let sessions = body["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert!(sessions[0]["session_data"]
        .as_str()
        .unwrap()
        .contains("basic-git-setup"));

    let (_, body) = common::get(&harness.app, &format!("/api/user/{user_id}/summary")).await;
    assert_eq!(body["data"]["practice_sessions_completed"], json!(2));

    let (_, body) = common::get(
        &harness.app,
        &format!("/api/practice/stats/{user_id}"),
    )
    .await;
    assert_eq!(body["data"]["command"]["completed"], json!(2));
    assert_eq!(body["data"]["command"]["time"], json!(240));
    assert_eq!(body["data"]["branch"]["completed"], json!(0));
}

// ---- export / import ---------------------------------------------------

#[tokio::test]
async fn export_then_import_restores_progress_elsewhere() {
    let source = common::spawn_app().await;
    let user_id = common::init_user(&source.app).await;

    complete_lesson(&source.app, &user_id, "git-basics").await;
    complete_lesson(&source.app, &user_id, "github-intro").await;
    common::post_json(
        &source.app,
        "/api/quiz/submit",
        json!({
            "user_id": &user_id,
            "quiz_type": "basic",
            "question_id": "q1_git_definition",
            "answer": 1
        }),
    )
    .await;

    let (status, export) =
        common::get(&source.app, &format!("/api/user/{user_id}/export")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(export["data"]["user_stats"]["user_id"], json!(&user_id));
    assert!(!export["data"]["export_timestamp"].as_str().unwrap().is_empty());

    // Restore the payload into a fresh database.
    let target = common::spawn_app().await;
    let (status, body) =
        common::post_json(&target.app, "/api/user/import", export["data"].clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Data imported successfully"));
    assert_eq!(body["data"]["user_progress"], json!(2));
    assert_eq!(body["data"]["quiz_results"], json!(1));

    let (_, body) = common::get(&target.app, &format!("/api/user/{user_id}/summary")).await;
    assert_eq!(body["data"]["beginner"], json!(50));
    assert_eq!(body["data"]["lessons_completed"], json!(2));

    // Importing the same payload again changes nothing.
    let (status, _) =
        common::post_json(&target.app, "/api/user/import", export["data"].clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = common::get(&target.app, &format!("/api/user/{user_id}/summary")).await;
    assert_eq!(body["data"]["lessons_completed"], json!(2));
}

#[tokio::test]
async fn import_requires_identity() {
    let harness = common::spawn_app().await;

    let (status, body) = common::post_json(
        &harness.app,
        "/api/user/import",
        json!({ "user_stats": null, "export_timestamp": "now", "version": "1.0.0" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Import payload must contain user_stats.user_id")
    );
}
