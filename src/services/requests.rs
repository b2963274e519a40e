//! Maintenance requests service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::request::{CreateRequest, MaintenanceRequest, UpdateRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.list().await
    }

    pub async fn list_by_equipment(&self, equipment_id: &str) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.list_by_equipment(equipment_id).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<MaintenanceRequest> {
        self.repository.requests.get_by_id(id).await
    }

    /// Create a request against existing equipment. Fails with NotFound when
    /// the equipment id matches nothing; otherwise the equipment's team id is
    /// copied onto the new request.
    pub async fn create(&self, data: &CreateRequest) -> AppResult<MaintenanceRequest> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let equipment = self.repository.equipment.get_by_id(&data.equipment_id).await?;

        self.repository
            .requests
            .create(data, equipment.maintenance_team_id.as_deref())
            .await
    }

    pub async fn update(&self, id: &str, data: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        self.repository.requests.update(id, data).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.requests.delete(id).await
    }
}
