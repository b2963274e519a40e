//! Maintenance teams repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::Clock;
use crate::{
    error::{AppError, AppResult},
    models::{
        team::{CreateTeam, MaintenanceTeam, TeamWithMembers},
        user::User,
    },
};

#[derive(Clone)]
pub struct TeamsRepository {
    pool: Pool<Postgres>,
    clock: Clock,
}

impl TeamsRepository {
    pub fn new(pool: Pool<Postgres>, clock: Clock) -> Self {
        Self { pool, clock }
    }

    /// List all teams with their members
    pub async fn list(&self) -> AppResult<Vec<TeamWithMembers>> {
        let teams =
            sqlx::query_as::<_, MaintenanceTeam>("SELECT * FROM maintenance_teams ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        let mut result = Vec::with_capacity(teams.len());
        for team in teams {
            let members = self.members_of(&team.id).await?;
            result.push(TeamWithMembers::new(team, members));
        }
        Ok(result)
    }

    /// Get a team with its members by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<TeamWithMembers> {
        let team = sqlx::query_as::<_, MaintenanceTeam>(
            "SELECT * FROM maintenance_teams WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let members = self.members_of(&team.id).await?;
        Ok(TeamWithMembers::new(team, members))
    }

    /// Create a team, resolving member ids; unknown ids are silently dropped
    pub async fn create(&self, data: &CreateTeam) -> AppResult<TeamWithMembers> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, MaintenanceTeam>(
            r#"
            INSERT INTO maintenance_teams (id, name, specialization, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&data.name)
        .bind(&data.specialization)
        .bind(self.clock.now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_write(e, "A team with this name already exists"))?;

        if !data.member_ids.is_empty() {
            Self::sync_members(&mut tx, &team.id, &data.member_ids).await?;
        }

        tx.commit().await?;

        let members = self.members_of(&team.id).await?;
        Ok(TeamWithMembers::new(team, members))
    }

    /// Full-replace update. Members are resynced only when member_ids is
    /// non-empty, matching the create/update contract.
    pub async fn update(&self, id: &str, data: &CreateTeam) -> AppResult<TeamWithMembers> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, MaintenanceTeam>(
            r#"
            UPDATE maintenance_teams
            SET name = $1, specialization = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.specialization)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::from_write(e, "A team with this name already exists"))?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        if !data.member_ids.is_empty() {
            sqlx::query("DELETE FROM team_members WHERE team_id = $1")
                .bind(&team.id)
                .execute(&mut *tx)
                .await?;
            Self::sync_members(&mut tx, &team.id, &data.member_ids).await?;
        }

        tx.commit().await?;

        let members = self.members_of(&team.id).await?;
        Ok(TeamWithMembers::new(team, members))
    }

    /// Insert join rows for every member id that matches an existing user
    async fn sync_members(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        team_id: &str,
        member_ids: &[String],
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team_members (team_id, user_id)
            SELECT $1, id FROM users WHERE id = ANY($2)
            "#,
        )
        .bind(team_id)
        .bind(member_ids)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// List the users belonging to a team
    async fn members_of(&self, team_id: &str) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT u.* FROM users u
            JOIN team_members tm ON tm.user_id = u.id
            WHERE tm.team_id = $1
            ORDER BY u.name
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
