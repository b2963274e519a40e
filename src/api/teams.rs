//! Maintenance team endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::team::{CreateTeam, TeamWithMembers},
};

/// List all teams with their members
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses(
        (status = 200, description = "List of teams", body = Vec<TeamWithMembers>)
    )
)]
pub async fn list_teams(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<TeamWithMembers>>> {
    let teams = state.services.teams.list().await?;
    Ok(Json(teams))
}

/// Get team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = TeamWithMembers),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TeamWithMembers>> {
    let team = state.services.teams.get_by_id(&id).await?;
    Ok(Json(team))
}

/// Create a team; unknown member ids are dropped without error
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeam,
    responses(
        (status = 200, description = "Team created", body = TeamWithMembers),
        (status = 409, description = "Team name already in use")
    )
)]
pub async fn create_team(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTeam>,
) -> AppResult<Json<TeamWithMembers>> {
    let team = state.services.teams.create(&data).await?;
    Ok(Json(team))
}

/// Update a team (full replace)
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    request_body = CreateTeam,
    responses(
        (status = 200, description = "Team updated", body = TeamWithMembers),
        (status = 404, description = "Team not found")
    )
)]
pub async fn update_team(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<CreateTeam>,
) -> AppResult<Json<TeamWithMembers>> {
    let team = state.services.teams.update(&id, &data).await?;
    Ok(Json(team))
}
