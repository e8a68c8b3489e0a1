use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PracticeSessionRow {
    #[serde(default)]
    pub id: i64,
    pub user_id: String,
    pub practice_type: String,
    pub session_data: Option<String>,
    pub completed: bool,
    pub time_spent: i64,
    pub completion_date: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PracticeTypeStats {
    pub completed: i64,
    pub total: i64,
    pub time: i64,
}

#[derive(Debug, FromRow)]
struct RawPracticeStats {
    practice_type: String,
    total_sessions: i64,
    completed_sessions: i64,
    total_time: i64,
}

/// Appends a session row (sessions are never updated) and bumps the stats
/// counters when the session is completed. Returns the new row id.
pub async fn insert_session(
    pool: &SqlitePool,
    user_id: &str,
    practice_type: &str,
    session_data: &str,
    completed: bool,
    time_spent: i64,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO practice_sessions (user_id, practice_type, session_data, completed, time_spent, completion_date)
        VALUES (?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(user_id)
    .bind(practice_type)
    .bind(session_data)
    .bind(completed)
    .bind(time_spent)
    .execute(&mut *tx)
    .await?;

    if completed {
        sqlx::query(
            r#"
            UPDATE user_stats
            SET practice_sessions_completed = practice_sessions_completed + 1,
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
    Ok(result.last_insert_rowid())
}

pub async fn sessions(
    pool: &SqlitePool,
    user_id: &str,
    practice_type: Option<&str>,
) -> Result<Vec<PracticeSessionRow>, sqlx::Error> {
    match practice_type {
        Some(practice_type) => {
            sqlx::query_as::<_, PracticeSessionRow>(
                r#"
                SELECT id, user_id, practice_type, session_data, completed, time_spent, completion_date
                FROM practice_sessions
                WHERE user_id = ? AND practice_type = ?
                ORDER BY completion_date DESC
                "#,
            )
            .bind(user_id)
            .bind(practice_type)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, PracticeSessionRow>(
                r#"
                SELECT id, user_id, practice_type, session_data, completed, time_spent, completion_date
                FROM practice_sessions
                WHERE user_id = ?
                ORDER BY completion_date DESC
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn stats_by_type(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<(String, PracticeTypeStats)>, sqlx::Error> {
    let rows = sqlx::query_as::<_, RawPracticeStats>(
        r#"
        SELECT
            practice_type,
            COUNT(*) as total_sessions,
            SUM(CASE WHEN completed = 1 THEN 1 ELSE 0 END) as completed_sessions,
            COALESCE(SUM(time_spent), 0) as total_time
        FROM practice_sessions
        WHERE user_id = ?
        GROUP BY practice_type
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            (
                row.practice_type,
                PracticeTypeStats {
                    completed: row.completed_sessions,
                    total: row.total_sessions,
                    time: row.total_time,
                },
            )
        })
        .collect())
}
