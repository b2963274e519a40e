//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{chat, dashboard, equipment, health, requests, teams, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "1.0.0",
        description = "Maintenance Tracking System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        teams::update_team,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Requests
        requests::list_requests,
        requests::list_equipment_requests,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        requests::delete_request,
        // Dashboard
        dashboard::get_dashboard_stats,
        // Chat
        chat::chat,
    ),
    components(
        schemas(
            crate::api::MessageResponse,
            crate::api::health::HealthResponse,
            crate::api::dashboard::DashboardStats,
            crate::error::ErrorResponse,
            crate::models::enums::RequestType,
            crate::models::enums::RequestStatus,
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::team::MaintenanceTeam,
            crate::models::team::TeamWithMembers,
            crate::models::team::CreateTeam,
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::request::MaintenanceRequest,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequest,
            crate::models::chat::ChatHistory,
            crate::models::chat::ChatRequest,
            crate::models::chat::ChatResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "users", description = "User management"),
        (name = "teams", description = "Maintenance teams"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "requests", description = "Maintenance requests"),
        (name = "dashboard", description = "Dashboard statistics"),
        (name = "chat", description = "Helper chatbot"),
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
