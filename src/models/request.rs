//! Maintenance request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{RequestStatus, RequestType};

/// Maintenance request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: String,
    pub subject: String,
    pub description: Option<String>,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub equipment_id: String,
    /// Copied from the equipment's team at creation time
    pub maintenance_team_id: Option<String>,
    pub assigned_user_id: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub duration_hours: Option<f64>,
    /// Free-text priority (e.g. "Low", "Medium", "High")
    pub priority: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation; always >= created_at
    pub updated_at: DateTime<Utc>,
}

fn default_priority() -> String {
    "Medium".to_string()
}

/// Create maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Subject must not be empty"))]
    pub subject: String,
    pub description: Option<String>,
    pub request_type: RequestType,
    pub equipment_id: String,
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default = "default_priority")]
    pub priority: String,
}

/// Partial update for a maintenance request.
///
/// Nullable attributes use a double option so that a field absent from the
/// patch body leaves the stored value unchanged, while an explicit `null`
/// clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRequest {
    pub subject: Option<String>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub status: Option<RequestStatus>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub assigned_user_id: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub duration_hours: Option<Option<f64>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
    pub priority: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_and_status_defaults() {
        let req: CreateRequest = serde_json::from_str(
            r#"{"subject": "S", "request_type": "Corrective", "equipment_id": "e1"}"#,
        )
        .unwrap();
        assert_eq!(req.priority, "Medium");
    }

    #[test]
    fn absent_patch_field_is_none() {
        let patch: UpdateRequest = serde_json::from_str(r#"{"subject": "New subject"}"#).unwrap();
        assert_eq!(patch.subject.as_deref(), Some("New subject"));
        assert!(patch.description.is_none());
        assert!(patch.duration_hours.is_none());
    }

    #[test]
    fn explicit_null_clears_nullable_field() {
        let patch: UpdateRequest =
            serde_json::from_str(r#"{"description": null, "duration_hours": 2.5}"#).unwrap();
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.duration_hours, Some(Some(2.5)));
        assert!(patch.scheduled_date.is_none());
    }

    #[test]
    fn status_patch_accepts_display_labels() {
        let patch: UpdateRequest = serde_json::from_str(r#"{"status": "In Progress"}"#).unwrap();
        assert_eq!(patch.status, Some(RequestStatus::InProgress));
    }
}
