//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Dashboard aggregate counts
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_equipment: i64,
    pub total_requests: i64,
    /// Requests whose status is New or In Progress
    pub active_requests: i64,
    pub teams_count: i64,
    /// Request count per status value; every status is present
    #[schema(value_type = Object)]
    pub requests_by_status: IndexMap<String, i64>,
    /// Request count per request type; every type is present
    #[schema(value_type = Object)]
    pub requests_by_type: IndexMap<String, i64>,
}

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Aggregate counts", body = DashboardStats)
    )
)]
pub async fn get_dashboard_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.dashboard.get_stats().await?;
    Ok(Json(stats))
}
