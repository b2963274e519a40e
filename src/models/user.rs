//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Email address, unique across all users
    pub email: String,
    /// Free-text role (e.g. "Technician", "Manager")
    pub role: String,
    /// Avatar URL
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn default_role() -> String {
    "Technician".to_string()
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_technician() {
        let user: CreateUser =
            serde_json::from_str(r#"{"name": "A", "email": "a@x.com"}"#).unwrap();
        assert_eq!(user.role, "Technician");
        assert!(user.avatar.is_none());
    }

    #[test]
    fn invalid_email_fails_validation() {
        let user: CreateUser =
            serde_json::from_str(r#"{"name": "A", "email": "not-an-email"}"#).unwrap();
        assert!(validator::Validate::validate(&user).is_err());
    }
}
