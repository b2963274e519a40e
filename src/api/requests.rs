//! Maintenance request endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::request::{CreateRequest, MaintenanceRequest, UpdateRequest},
};

use super::MessageResponse;

/// List all maintenance requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    responses(
        (status = 200, description = "Request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state.services.requests.list().await?;
    Ok(Json(requests))
}

/// List requests for one piece of equipment. Returns an empty list even when
/// the equipment id itself matches nothing.
#[utoipa::path(
    get,
    path = "/equipment/{id}/requests",
    tag = "requests",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Requests for the equipment", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_equipment_requests(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state.services.requests.list_by_equipment(&id).await?;
    Ok(Json(requests))
}

/// Get request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = MaintenanceRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.get_by_id(&id).await?;
    Ok(Json(request))
}

/// Create a maintenance request. The referenced equipment must exist; its
/// team id is copied onto the new request.
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 200, description = "Request created", body = MaintenanceRequest),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.create(&data).await?;
    Ok(Json(request))
}

/// Patch a maintenance request; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Request updated", body = MaintenanceRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn update_request(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.update(&id, &data).await?;
    Ok(Json(request))
}

/// Delete a maintenance request
#[utoipa::path(
    delete,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request deleted", body = MessageResponse),
        (status = 404, description = "Request not found")
    )
)]
pub async fn delete_request(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.requests.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Request deleted successfully".to_string(),
    }))
}
