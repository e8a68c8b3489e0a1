use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResultRow {
    #[serde(default)]
    pub id: i64,
    pub user_id: String,
    pub quiz_type: String,
    pub question_id: String,
    pub answer: String,
    pub is_correct: bool,
    pub attempts: i64,
    pub time_spent: i64,
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct QuizTypeStats {
    pub score: i64,
    pub answered: i64,
    pub total: i64,
}

#[derive(Debug, FromRow)]
struct RawQuizStats {
    quiz_type: String,
    total_answered: i64,
    score: f64,
}

/// Records an answer. First submission inserts; resubmission updates in place
/// with `attempts + 1`. `quizzes_completed` moves only when a brand-new row is
/// correct, so retrying a question never inflates the counter.
pub async fn submit_answer(
    pool: &SqlitePool,
    user_id: &str,
    quiz_type: &str,
    question_id: &str,
    answer: i64,
    is_correct: bool,
    time_spent: i64,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM quiz_results WHERE user_id = ? AND quiz_type = ? AND question_id = ?",
    )
    .bind(user_id)
    .bind(quiz_type)
    .bind(question_id)
    .fetch_optional(&mut *tx)
    .await?;

    if let Some(id) = existing {
        sqlx::query(
            r#"
            UPDATE quiz_results
            SET answer = ?, is_correct = ?, attempts = attempts + 1,
                completed_at = CURRENT_TIMESTAMP, time_spent = ?
            WHERE id = ?
            "#,
        )
        .bind(answer.to_string())
        .bind(is_correct)
        .bind(time_spent)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    } else {
        sqlx::query(
            r#"
            INSERT INTO quiz_results (user_id, quiz_type, question_id, answer, is_correct, time_spent, completed_at)
            VALUES (?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(user_id)
        .bind(quiz_type)
        .bind(question_id)
        .bind(answer.to_string())
        .bind(is_correct)
        .bind(time_spent)
        .execute(&mut *tx)
        .await?;

        if is_correct {
            sqlx::query(
                r#"
                UPDATE user_stats
                SET quizzes_completed = quizzes_completed + 1,
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
    }

    tx.commit().await?;
    Ok(())
}

pub async fn results(
    pool: &SqlitePool,
    user_id: &str,
    quiz_type: &str,
) -> Result<Vec<QuizResultRow>, sqlx::Error> {
    sqlx::query_as::<_, QuizResultRow>(
        r#"
        SELECT id, user_id, quiz_type, question_id, answer, is_correct, attempts, time_spent, completed_at
        FROM quiz_results
        WHERE user_id = ? AND quiz_type = ?
        ORDER BY completed_at DESC
        "#,
    )
    .bind(user_id)
    .bind(quiz_type)
    .fetch_all(pool)
    .await
}

/// Per-type score (average correctness x100, rounded) and answered count.
/// The caller fills in `total` from the content tables.
pub async fn stats_by_type(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<(String, QuizTypeStats)>, sqlx::Error> {
    let rows = sqlx::query_as::<_, RawQuizStats>(
        r#"
        SELECT
            quiz_type,
            COUNT(*) as total_answered,
            AVG(CASE WHEN is_correct = 1 THEN 100.0 ELSE 0.0 END) as score
        FROM quiz_results
        WHERE user_id = ?
        GROUP BY quiz_type
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            (
                row.quiz_type,
                QuizTypeStats {
                    score: row.score.round() as i64,
                    answered: row.total_answered,
                    total: 0,
                },
            )
        })
        .collect())
}
