//! Chat history model and chat API shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One logged chatbot exchange (append-only)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChatHistory {
    pub id: String,
    pub session_id: String,
    pub user_message: String,
    pub ai_response: String,
    pub created_at: DateTime<Utc>,
}

fn default_session() -> String {
    "default".to_string()
}

/// Chat request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_session")]
    pub session_id: String,
}

/// Chat response
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_defaults_to_default() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(req.session_id, "default");
    }
}
