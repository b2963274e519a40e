//! Equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.create(data).await
    }

    pub async fn update(&self, id: &str, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.update(id, data).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}
