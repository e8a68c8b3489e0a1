use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AchievementRow {
    #[serde(default)]
    pub id: i64,
    pub user_id: String,
    pub achievement_type: String,
    pub achievement_data: Option<String>,
    pub earned_at: String,
}

/// Grant-if-absent. A duplicate grant returns the existing row with its
/// original `earned_at` untouched; the bool reports whether a row was created.
pub async fn grant(
    pool: &SqlitePool,
    user_id: &str,
    achievement_type: &str,
    achievement_data: Option<&str>,
) -> Result<(AchievementRow, bool), sqlx::Error> {
    let existing = sqlx::query_as::<_, AchievementRow>(
        r#"
        SELECT id, user_id, achievement_type, achievement_data, earned_at
        FROM achievements
        WHERE user_id = ? AND achievement_type = ?
        "#,
    )
    .bind(user_id)
    .bind(achievement_type)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = existing {
        return Ok((row, false));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO achievements (user_id, achievement_type, achievement_data, earned_at)
        VALUES (?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(user_id)
    .bind(achievement_type)
    .bind(achievement_data)
    .execute(pool)
    .await?;

    let row = sqlx::query_as::<_, AchievementRow>(
        r#"
        SELECT id, user_id, achievement_type, achievement_data, earned_at
        FROM achievements
        WHERE id = ?
        "#,
    )
    .bind(result.last_insert_rowid())
    .fetch_one(pool)
    .await?;

    Ok((row, true))
}

pub async fn list(pool: &SqlitePool, user_id: &str) -> Result<Vec<AchievementRow>, sqlx::Error> {
    sqlx::query_as::<_, AchievementRow>(
        r#"
        SELECT id, user_id, achievement_type, achievement_data, earned_at
        FROM achievements
        WHERE user_id = ?
        ORDER BY earned_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
