use sqlx::SqlitePool;
use tempfile::TempDir;

use gitmaster_backend::content::ContentStore;
use gitmaster_backend::db;
use gitmaster_backend::db::operations::{achievements, practice, progress, quiz, user};

async fn test_pool() -> (SqlitePool, TempDir) {
    let tmp = TempDir::new().expect("create temp dir");
    let pool = db::init_pool(&tmp.path().join("store.db"))
        .await
        .expect("init test database");
    (pool, tmp)
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let (pool, _tmp) = test_pool().await;

    // init_pool already ran them once; a second run must be a no-op.
    db::run_migrations(&pool).await.expect("re-run migrations");

    let version: Option<String> =
        sqlx::query_scalar("SELECT value FROM _db_metadata WHERE key = 'schema_version'")
            .fetch_optional(&pool)
            .await
            .unwrap();
    assert_eq!(version.as_deref(), Some(db::SCHEMA_VERSION));
}

#[tokio::test]
async fn init_user_creates_once() {
    let (pool, _tmp) = test_pool().await;

    let (stats, created) = user::init_user(&pool, "u1").await.unwrap();
    assert!(created);
    assert_eq!(stats.current_level, "beginner");
    assert_eq!(stats.lessons_completed, 0);

    let (again, created) = user::init_user(&pool, "u1").await.unwrap();
    assert!(!created);
    assert_eq!(again.id, stats.id);
}

#[tokio::test]
async fn lesson_counter_increments_only_on_first_completion() {
    let (pool, _tmp) = test_pool().await;
    user::init_user(&pool, "u1").await.unwrap();

    let newly = progress::record_lesson_progress(&pool, "u1", "beginner", "git-basics", true, 60)
        .await
        .unwrap();
    assert!(newly);

    let newly = progress::record_lesson_progress(&pool, "u1", "beginner", "git-basics", true, 30)
        .await
        .unwrap();
    assert!(!newly);

    let stats = user::fetch_user_stats(&pool, "u1").await.unwrap().unwrap();
    assert_eq!(stats.lessons_completed, 1);

    let rows = progress::course_progress(&pool, "u1", "beginner").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].completed);
    // Latest submission wins on the detail row.
    assert_eq!(rows[0].time_spent, 30);
}

#[tokio::test]
async fn incomplete_then_complete_counts_once() {
    let (pool, _tmp) = test_pool().await;
    user::init_user(&pool, "u1").await.unwrap();

    progress::record_lesson_progress(&pool, "u1", "beginner", "git-basics", false, 45)
        .await
        .unwrap();
    let stats = user::fetch_user_stats(&pool, "u1").await.unwrap().unwrap();
    assert_eq!(stats.lessons_completed, 0);

    let newly = progress::record_lesson_progress(&pool, "u1", "beginner", "git-basics", true, 45)
        .await
        .unwrap();
    assert!(newly);
    let stats = user::fetch_user_stats(&pool, "u1").await.unwrap().unwrap();
    assert_eq!(stats.lessons_completed, 1);
}

#[tokio::test]
async fn quiz_counter_tracks_new_correct_answers_only() {
    let (pool, _tmp) = test_pool().await;
    user::init_user(&pool, "u1").await.unwrap();

    quiz::submit_answer(&pool, "u1", "basic", "q1", 1, true, 10)
        .await
        .unwrap();
    quiz::submit_answer(&pool, "u1", "basic", "q1", 1, true, 10)
        .await
        .unwrap();
    quiz::submit_answer(&pool, "u1", "basic", "q2", 0, false, 5)
        .await
        .unwrap();

    let stats = user::fetch_user_stats(&pool, "u1").await.unwrap().unwrap();
    assert_eq!(stats.quizzes_completed, 1);

    let results = quiz::results(&pool, "u1", "basic").await.unwrap();
    assert_eq!(results.len(), 2);
    let q1 = results.iter().find(|r| r.question_id == "q1").unwrap();
    assert_eq!(q1.attempts, 2);
}

#[tokio::test]
async fn practice_sessions_are_append_only() {
    let (pool, _tmp) = test_pool().await;
    user::init_user(&pool, "u1").await.unwrap();

    for _ in 0..2 {
        practice::insert_session(&pool, "u1", "command", "{}", true, 120)
            .await
            .unwrap();
    }
    practice::insert_session(&pool, "u1", "branch", "{}", false, 30)
        .await
        .unwrap();

    let stats = user::fetch_user_stats(&pool, "u1").await.unwrap().unwrap();
    assert_eq!(stats.practice_sessions_completed, 2);

    let all = practice::sessions(&pool, "u1", None).await.unwrap();
    assert_eq!(all.len(), 3);
    let commands = practice::sessions(&pool, "u1", Some("command")).await.unwrap();
    assert_eq!(commands.len(), 2);
}

#[tokio::test]
async fn achievement_keeps_first_grant() {
    let (pool, _tmp) = test_pool().await;
    user::init_user(&pool, "u1").await.unwrap();

    let (first, created) = achievements::grant(&pool, "u1", "first_lesson", Some("{}"))
        .await
        .unwrap();
    assert!(created);

    let (second, created) = achievements::grant(&pool, "u1", "first_lesson", None)
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(second.earned_at, first.earned_at);
    assert_eq!(second.id, first.id);
}

#[tokio::test]
async fn summary_derives_from_raw_rows() {
    let (pool, _tmp) = test_pool().await;
    let content = ContentStore::new();
    user::init_user(&pool, "u1").await.unwrap();

    progress::record_lesson_progress(&pool, "u1", "beginner", "git-basics", true, 60)
        .await
        .unwrap();
    progress::record_lesson_progress(&pool, "u1", "beginner", "github-intro", true, 60)
        .await
        .unwrap();
    quiz::submit_answer(&pool, "u1", "basic", "q1", 1, true, 10)
        .await
        .unwrap();
    quiz::submit_answer(&pool, "u1", "basic", "q2", 0, false, 10)
        .await
        .unwrap();

    let summary = user::summarize(&pool, &content, "u1").await.unwrap().unwrap();
    assert_eq!(summary.beginner, 50);
    assert_eq!(summary.intermediate, 0);
    assert_eq!(summary.overall_progress, 17);
    assert_eq!(summary.quiz_scores.basic, 50);
    assert_eq!(summary.lessons_completed, 2);

    assert!(user::summarize(&pool, &content, "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn import_is_idempotent() {
    let (pool, _tmp) = test_pool().await;
    user::init_user(&pool, "u1").await.unwrap();
    progress::record_lesson_progress(&pool, "u1", "beginner", "git-basics", true, 60)
        .await
        .unwrap();
    practice::insert_session(&pool, "u1", "command", "{}", true, 120)
        .await
        .unwrap();
    achievements::grant(&pool, "u1", "first_lesson", None)
        .await
        .unwrap();

    let export = user::export_user(&pool, "u1").await.unwrap();

    let counts = user::import_user(&pool, &export, "u1").await.unwrap();
    assert_eq!(counts.user_progress, 1);
    assert_eq!(counts.practice_sessions, 1);
    assert_eq!(counts.achievements, 1);

    user::import_user(&pool, &export, "u1").await.unwrap();

    let sessions = practice::sessions(&pool, "u1", None).await.unwrap();
    assert_eq!(sessions.len(), 1);
    let rows = progress::course_progress(&pool, "u1", "beginner").await.unwrap();
    assert_eq!(rows.len(), 1);
    let stats = user::fetch_user_stats(&pool, "u1").await.unwrap().unwrap();
    assert_eq!(stats.lessons_completed, 1);
}
