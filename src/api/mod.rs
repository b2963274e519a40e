//! API handlers for GearGuard REST endpoints

pub mod chat;
pub mod dashboard;
pub mod equipment;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod teams;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation message returned by delete endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
