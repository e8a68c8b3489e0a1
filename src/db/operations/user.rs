use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::content::{ContentStore, CourseType, QuizType};
use crate::db::operations::achievements::AchievementRow;
use crate::db::operations::practice::PracticeSessionRow;
use crate::db::operations::progress::ProgressRow;
use crate::db::operations::quiz::QuizResultRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub id: i64,
    pub user_id: String,
    pub total_study_time: i64,
    pub lessons_completed: i64,
    pub quizzes_completed: i64,
    pub practice_sessions_completed: i64,
    pub current_level: String,
    pub streak_days: i64,
    pub last_activity_date: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LearningPathRow {
    #[serde(default)]
    pub id: i64,
    pub user_id: String,
    pub path_name: String,
    pub path_config: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

pub async fn fetch_user_stats(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<UserStats>, sqlx::Error> {
    sqlx::query_as::<_, UserStats>("SELECT * FROM user_stats WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Create-or-fetch. Returns the stats row plus whether it was freshly created.
pub async fn init_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<(UserStats, bool), sqlx::Error> {
    if let Some(existing) = fetch_user_stats(pool, user_id).await? {
        return Ok((existing, false));
    }

    sqlx::query(
        r#"
        INSERT INTO user_stats (user_id, total_study_time, lessons_completed, quizzes_completed, practice_sessions_completed, current_level)
        VALUES (?, 0, 0, 0, 0, 'beginner')
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    let created = sqlx::query_as::<_, UserStats>("SELECT * FROM user_stats WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok((created, true))
}

#[derive(Debug, Serialize)]
pub struct QuizScores {
    pub basic: i64,
    pub commands: i64,
    pub workflow: i64,
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub user_id: String,
    pub overall_progress: i64,
    pub beginner: i64,
    pub intermediate: i64,
    pub advanced: i64,
    pub quiz_scores: QuizScores,
    pub total_study_time: i64,
    pub lessons_completed: i64,
    pub quizzes_completed: i64,
    pub practice_sessions_completed: i64,
    pub achievements_count: i64,
    pub streak_days: i64,
    pub current_level: String,
}

#[derive(Debug, FromRow)]
struct CourseCompletion {
    course_type: String,
    completed_lessons: i64,
}

#[derive(Debug, FromRow)]
struct QuizScoreRow {
    quiz_type: String,
    score: f64,
}

pub fn course_percentage(completed: i64, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as i64
}

/// Aggregates the dashboard numbers. Course percentages divide by the number
/// of lessons the course actually has, not by how many the user has touched,
/// so an untouched course reads 0 rather than vanishing from the average.
pub async fn summarize(
    pool: &SqlitePool,
    content: &ContentStore,
    user_id: &str,
) -> Result<Option<UserSummary>, sqlx::Error> {
    let Some(stats) = fetch_user_stats(pool, user_id).await? else {
        return Ok(None);
    };

    let completions = sqlx::query_as::<_, CourseCompletion>(
        r#"
        SELECT course_type, SUM(CASE WHEN completed = 1 THEN 1 ELSE 0 END) as completed_lessons
        FROM user_progress
        WHERE user_id = ?
        GROUP BY course_type
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let completed_by_course: HashMap<String, i64> = completions
        .into_iter()
        .map(|row| (row.course_type, row.completed_lessons))
        .collect();

    let percent = |course: CourseType| {
        let completed = completed_by_course
            .get(course.as_str())
            .copied()
            .unwrap_or(0);
        course_percentage(completed, content.course_total(course))
    };

    let beginner = percent(CourseType::Beginner);
    let intermediate = percent(CourseType::Intermediate);
    let advanced = percent(CourseType::Advanced);
    let overall_progress = ((beginner + intermediate + advanced) as f64 / 3.0).round() as i64;

    let score_rows = sqlx::query_as::<_, QuizScoreRow>(
        r#"
        SELECT quiz_type, AVG(CASE WHEN is_correct = 1 THEN 100.0 ELSE 0.0 END) as score
        FROM quiz_results
        WHERE user_id = ?
        GROUP BY quiz_type
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut quiz_scores = QuizScores {
        basic: 0,
        commands: 0,
        workflow: 0,
    };
    for row in score_rows {
        let score = row.score.round() as i64;
        match row.quiz_type.parse::<QuizType>() {
            Ok(QuizType::Basic) => quiz_scores.basic = score,
            Ok(QuizType::Commands) => quiz_scores.commands = score,
            Ok(QuizType::Workflow) => quiz_scores.workflow = score,
            Err(_) => {}
        }
    }

    let achievements_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM achievements WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    Ok(Some(UserSummary {
        user_id: user_id.to_string(),
        overall_progress,
        beginner,
        intermediate,
        advanced,
        quiz_scores,
        total_study_time: stats.total_study_time,
        lessons_completed: stats.lessons_completed,
        quizzes_completed: stats.quizzes_completed,
        practice_sessions_completed: stats.practice_sessions_completed,
        achievements_count,
        streak_days: stats.streak_days,
        current_level: stats.current_level,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserExport {
    pub user_stats: Option<UserStats>,
    #[serde(default)]
    pub user_progress: Vec<ProgressRow>,
    #[serde(default)]
    pub quiz_results: Vec<QuizResultRow>,
    #[serde(default)]
    pub practice_sessions: Vec<PracticeSessionRow>,
    #[serde(default)]
    pub achievements: Vec<AchievementRow>,
    #[serde(default)]
    pub learning_paths: Vec<LearningPathRow>,
    #[serde(default)]
    pub export_timestamp: String,
    #[serde(default)]
    pub version: String,
}

pub async fn export_user(pool: &SqlitePool, user_id: &str) -> Result<UserExport, sqlx::Error> {
    let user_stats = fetch_user_stats(pool, user_id).await?;

    let user_progress =
        sqlx::query_as::<_, ProgressRow>("SELECT * FROM user_progress WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    let quiz_results =
        sqlx::query_as::<_, QuizResultRow>("SELECT * FROM quiz_results WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    let practice_sessions = sqlx::query_as::<_, PracticeSessionRow>(
        "SELECT * FROM practice_sessions WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let achievements =
        sqlx::query_as::<_, AchievementRow>("SELECT * FROM achievements WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    let learning_paths =
        sqlx::query_as::<_, LearningPathRow>("SELECT * FROM learning_paths WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    Ok(UserExport {
        user_stats,
        user_progress,
        quiz_results,
        practice_sessions,
        achievements,
        learning_paths,
        export_timestamp: chrono::Utc::now().to_rfc3339(),
        version: crate::db::SCHEMA_VERSION.to_string(),
    })
}

#[derive(Debug, Default, Serialize)]
pub struct ImportCounts {
    pub user_progress: usize,
    pub quiz_results: usize,
    pub practice_sessions: usize,
    pub achievements: usize,
    pub learning_paths: usize,
}

/// Restores a previously exported payload in one transaction. Keyed rows
/// (stats, progress, quiz results) are upserted, session-style tables are
/// replaced wholesale, and achievements keep their earliest grant. Importing
/// the same payload twice leaves the database unchanged.
pub async fn import_user(
    pool: &SqlitePool,
    payload: &UserExport,
    user_id: &str,
) -> Result<ImportCounts, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut counts = ImportCounts::default();

    if let Some(stats) = &payload.user_stats {
        sqlx::query(
            r#"
            INSERT INTO user_stats (user_id, total_study_time, lessons_completed, quizzes_completed, practice_sessions_completed, current_level, streak_days, last_activity_date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id)
            DO UPDATE SET
                total_study_time = excluded.total_study_time,
                lessons_completed = excluded.lessons_completed,
                quizzes_completed = excluded.quizzes_completed,
                practice_sessions_completed = excluded.practice_sessions_completed,
                current_level = excluded.current_level,
                streak_days = excluded.streak_days,
                last_activity_date = excluded.last_activity_date,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(user_id)
        .bind(stats.total_study_time)
        .bind(stats.lessons_completed)
        .bind(stats.quizzes_completed)
        .bind(stats.practice_sessions_completed)
        .bind(&stats.current_level)
        .bind(stats.streak_days)
        .bind(&stats.last_activity_date)
        .execute(&mut *tx)
        .await?;
    }

    for row in &payload.user_progress {
        sqlx::query(
            r#"
            INSERT INTO user_progress (user_id, course_type, lesson_id, completed, time_spent, completion_date)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id, course_type, lesson_id)
            DO UPDATE SET
                completed = excluded.completed,
                time_spent = excluded.time_spent,
                completion_date = excluded.completion_date
            "#,
        )
        .bind(user_id)
        .bind(&row.course_type)
        .bind(&row.lesson_id)
        .bind(row.completed)
        .bind(row.time_spent)
        .bind(&row.completion_date)
        .execute(&mut *tx)
        .await?;
        counts.user_progress += 1;
    }

    for row in &payload.quiz_results {
        sqlx::query(
            r#"
            INSERT INTO quiz_results (user_id, quiz_type, question_id, answer, is_correct, attempts, time_spent, completed_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id, quiz_type, question_id)
            DO UPDATE SET
                answer = excluded.answer,
                is_correct = excluded.is_correct,
                attempts = excluded.attempts,
                time_spent = excluded.time_spent,
                completed_at = excluded.completed_at
            "#,
        )
        .bind(user_id)
        .bind(&row.quiz_type)
        .bind(&row.question_id)
        .bind(&row.answer)
        .bind(row.is_correct)
        .bind(row.attempts)
        .bind(row.time_spent)
        .bind(&row.completed_at)
        .execute(&mut *tx)
        .await?;
        counts.quiz_results += 1;
    }

    sqlx::query("DELETE FROM practice_sessions WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    for row in &payload.practice_sessions {
        sqlx::query(
            r#"
            INSERT INTO practice_sessions (user_id, practice_type, session_data, completed, time_spent, completion_date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(&row.practice_type)
        .bind(&row.session_data)
        .bind(row.completed)
        .bind(row.time_spent)
        .bind(&row.completion_date)
        .execute(&mut *tx)
        .await?;
        counts.practice_sessions += 1;
    }

    for row in &payload.achievements {
        sqlx::query(
            r#"
            INSERT INTO achievements (user_id, achievement_type, achievement_data, earned_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(user_id, achievement_type) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(&row.achievement_type)
        .bind(&row.achievement_data)
        .bind(&row.earned_at)
        .execute(&mut *tx)
        .await?;
        counts.achievements += 1;
    }

    sqlx::query("DELETE FROM learning_paths WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    for row in &payload.learning_paths {
        sqlx::query(
            r#"
            INSERT INTO learning_paths (user_id, path_name, path_config, is_active)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(&row.path_name)
        .bind(&row.path_config)
        .bind(row.is_active)
        .execute(&mut *tx)
        .await?;
        counts.learning_paths += 1;
    }

    tx.commit().await?;
    Ok(counts)
}
