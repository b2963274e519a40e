//! Chat history repository (append-only log)

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::Clock;
use crate::{error::AppResult, models::chat::ChatHistory};

#[derive(Clone)]
pub struct ChatRepository {
    pool: Pool<Postgres>,
    clock: Clock,
}

impl ChatRepository {
    pub fn new(pool: Pool<Postgres>, clock: Clock) -> Self {
        Self { pool, clock }
    }

    /// Append one exchange to the chat log
    pub async fn append(
        &self,
        session_id: &str,
        user_message: &str,
        ai_response: &str,
    ) -> AppResult<ChatHistory> {
        let row = sqlx::query_as::<_, ChatHistory>(
            r#"
            INSERT INTO chat_history (id, session_id, user_message, ai_response, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(session_id)
        .bind(user_message)
        .bind(ai_response)
        .bind(self.clock.now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
