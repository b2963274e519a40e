//! Equipment repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::Clock;
use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
    clock: Clock,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>, clock: Clock) -> Self {
        Self { pool, clock }
    }

    /// List all equipment
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (id, name, serial_number, category, department, assigned_to,
                                   location, purchase_date, warranty_expiry, maintenance_team_id,
                                   image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.category)
        .bind(&data.department)
        .bind(&data.assigned_to)
        .bind(&data.location)
        .bind(data.purchase_date)
        .bind(data.warranty_expiry)
        .bind(&data.maintenance_team_id)
        .bind(&data.image_url)
        .bind(self.clock.now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Equipment with this serial number already exists"))?;
        Ok(row)
    }

    /// Full-replace update: every field is applied, omitted optionals reset to null
    pub async fn update(&self, id: &str, data: &CreateEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET name = $1, serial_number = $2, category = $3, department = $4,
                assigned_to = $5, location = $6, purchase_date = $7, warranty_expiry = $8,
                maintenance_team_id = $9, image_url = $10
            WHERE id = $11
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.category)
        .bind(&data.department)
        .bind(&data.assigned_to)
        .bind(&data.location)
        .bind(data.purchase_date)
        .bind(data.warranty_expiry)
        .bind(&data.maintenance_team_id)
        .bind(&data.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Equipment with this serial number already exists"))?
        .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))
    }

    /// Delete equipment; dependent requests are removed by the schema's cascade
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Equipment not found".to_string()));
        }
        Ok(())
    }
}
