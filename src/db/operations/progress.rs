use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProgressRow {
    #[serde(default)]
    pub id: i64,
    pub user_id: String,
    pub course_type: String,
    pub lesson_id: String,
    pub completed: bool,
    pub time_spent: i64,
    pub completion_date: Option<String>,
}

/// Upserts the lesson row and bumps `lessons_completed` only when the row
/// transitions into the completed state. Both writes share a transaction so a
/// re-submitted completion can never double-count.
pub async fn record_lesson_progress(
    pool: &SqlitePool,
    user_id: &str,
    course_type: &str,
    lesson_id: &str,
    completed: bool,
    time_spent: i64,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let previously_completed: Option<bool> = sqlx::query_scalar(
        "SELECT completed FROM user_progress WHERE user_id = ? AND course_type = ? AND lesson_id = ?",
    )
    .bind(user_id)
    .bind(course_type)
    .bind(lesson_id)
    .fetch_optional(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO user_progress (user_id, course_type, lesson_id, completed, time_spent, completion_date)
        VALUES (?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(user_id, course_type, lesson_id)
        DO UPDATE SET
            completed = excluded.completed,
            time_spent = excluded.time_spent,
            completion_date = CURRENT_TIMESTAMP
        "#,
    )
    .bind(user_id)
    .bind(course_type)
    .bind(lesson_id)
    .bind(completed)
    .bind(time_spent)
    .execute(&mut *tx)
    .await?;

    let newly_completed = completed && !previously_completed.unwrap_or(false);
    if newly_completed {
        sqlx::query(
            r#"
            UPDATE user_stats
            SET lessons_completed = lessons_completed + 1,
                total_study_time = total_study_time + ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE user_id = ?
            "#,
        )
        .bind(time_spent)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(newly_completed)
}

pub async fn course_progress(
    pool: &SqlitePool,
    user_id: &str,
    course_type: &str,
) -> Result<Vec<ProgressRow>, sqlx::Error> {
    sqlx::query_as::<_, ProgressRow>(
        r#"
        SELECT id, user_id, course_type, lesson_id, completed, time_spent, completion_date
        FROM user_progress
        WHERE user_id = ? AND course_type = ?
        ORDER BY lesson_id
        "#,
    )
    .bind(user_id)
    .bind(course_type)
    .fetch_all(pool)
    .await
}

/// Returns false when no user row matched the update.
pub async fn add_study_time(
    pool: &SqlitePool,
    user_id: &str,
    time_spent: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE user_stats
        SET total_study_time = total_study_time + ?,
            last_activity_date = CURRENT_DATE,
            updated_at = CURRENT_TIMESTAMP
        WHERE user_id = ?
        "#,
    )
    .bind(time_spent)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
