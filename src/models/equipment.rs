//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    /// Serial number, unique across all equipment
    pub serial_number: String,
    pub category: String,
    pub department: Option<String>,
    /// Free-text name of the person the equipment is assigned to
    pub assigned_to: Option<String>,
    pub location: String,
    pub purchase_date: Option<DateTime<Utc>>,
    pub warranty_expiry: Option<DateTime<Utc>>,
    /// Team responsible for maintaining this equipment
    pub maintenance_team_id: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create equipment request; also used for PUT, which is a full replace
/// (omitted optional fields are reset to null)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Serial number must not be empty"))]
    pub serial_number: String,
    pub category: String,
    pub department: Option<String>,
    pub assigned_to: Option<String>,
    pub location: String,
    pub purchase_date: Option<DateTime<Utc>>,
    pub warranty_expiry: Option<DateTime<Utc>>,
    pub maintenance_team_id: Option<String>,
    pub image_url: Option<String>,
}
