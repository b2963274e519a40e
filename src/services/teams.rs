//! Maintenance teams service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::team::{CreateTeam, TeamWithMembers},
    repository::Repository,
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<TeamWithMembers>> {
        self.repository.teams.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<TeamWithMembers> {
        self.repository.teams.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateTeam) -> AppResult<TeamWithMembers> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.teams.create(data).await
    }

    pub async fn update(&self, id: &str, data: &CreateTeam) -> AppResult<TeamWithMembers> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.teams.update(id, data).await
    }
}
