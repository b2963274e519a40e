//! Maintenance requests repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::Clock;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RequestStatus,
        request::{CreateRequest, MaintenanceRequest, UpdateRequest},
    },
};

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
    clock: Clock,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>, clock: Clock) -> Self {
        Self { pool, clock }
    }

    /// List all maintenance requests
    pub async fn list(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List requests for one piece of equipment; empty when the equipment id
    /// matches nothing
    pub async fn list_by_equipment(&self, equipment_id: &str) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE equipment_id = $1 ORDER BY created_at",
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get request by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Request not found".to_string()))
    }

    /// Create a request. The team id is the one copied from the referenced
    /// equipment by the service layer.
    pub async fn create(
        &self,
        data: &CreateRequest,
        maintenance_team_id: Option<&str>,
    ) -> AppResult<MaintenanceRequest> {
        let now = self.clock.now();
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests
                (id, subject, description, request_type, status, equipment_id,
                 maintenance_team_id, assigned_user_id, scheduled_date, duration_hours,
                 priority, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NULL, $8, NULL, $9, $10, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&data.subject)
        .bind(&data.description)
        .bind(data.request_type)
        .bind(RequestStatus::New)
        .bind(&data.equipment_id)
        .bind(maintenance_team_id)
        .bind(data.scheduled_date)
        .bind(&data.priority)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "A request with this id already exists"))?;
        Ok(row)
    }

    /// Partial update: only fields present in the patch are applied; explicit
    /// nulls clear nullable fields. updated_at is refreshed on every call.
    pub async fn update(&self, id: &str, data: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        let now = self.clock.now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.subject, "subject");
        add_field!(data.description, "description");
        add_field!(data.status, "status");
        add_field!(data.assigned_user_id, "assigned_user_id");
        add_field!(data.duration_hours, "duration_hours");
        add_field!(data.scheduled_date, "scheduled_date");
        add_field!(data.priority, "priority");

        let query = format!(
            "UPDATE maintenance_requests SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, MaintenanceRequest>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.subject);
        bind_field!(data.description);
        bind_field!(data.status);
        bind_field!(data.assigned_user_id);
        bind_field!(data.duration_hours);
        bind_field!(data.scheduled_date);
        bind_field!(data.priority);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_write(e, "Request update conflicts with existing data"))?
            .ok_or_else(|| AppError::NotFound("Request not found".to_string()))
    }

    /// Delete a request
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Request not found".to_string()));
        }
        Ok(())
    }
}
