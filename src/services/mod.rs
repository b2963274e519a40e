//! Business logic services

pub mod chat;
pub mod dashboard;
pub mod equipment;
pub mod requests;
pub mod teams;
pub mod users;

use crate::{config::LlmConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub teams: teams::TeamsService,
    pub equipment: equipment::EquipmentService,
    pub requests: requests::RequestsService,
    pub dashboard: dashboard::DashboardService,
    pub chat: chat::ChatService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, llm_config: LlmConfig) -> Self {
        Self {
            users: users::UsersService::new(repository.clone()),
            teams: teams::TeamsService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository.clone()),
            chat: chat::ChatService::new(repository, llm_config),
        }
    }
}
