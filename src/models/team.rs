//! Maintenance team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::user::User;

/// Maintenance team record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceTeam {
    pub id: String,
    /// Team name, unique across all teams
    pub name: String,
    pub specialization: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Team projection with its members embedded
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamWithMembers {
    pub id: String,
    pub name: String,
    pub specialization: Option<String>,
    pub members: Vec<User>,
    pub created_at: DateTime<Utc>,
}

impl TeamWithMembers {
    pub fn new(team: MaintenanceTeam, members: Vec<User>) -> Self {
        Self {
            id: team.id,
            name: team.name,
            specialization: team.specialization,
            members,
            created_at: team.created_at,
        }
    }
}

/// Create team request; also used for PUT (full replace).
/// Member ids that do not match an existing user are silently dropped.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeam {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub specialization: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<String>,
}
