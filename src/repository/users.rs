//! Users repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::Clock;
use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
    clock: Clock,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>, clock: Clock) -> Self {
        Self { pool, clock }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Create a user with a generated id and creation timestamp
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, role, avatar, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.role)
        .bind(&data.avatar)
        .bind(self.clock.now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "A user with this email already exists"))?;
        Ok(row)
    }
}
