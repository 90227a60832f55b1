use sqlx::PgPool;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list_all().await
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<ApiResponse, AppError> {
        self.repository.create(&request).await?;
        Ok(ApiResponse::ok())
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse, AppError> {
        self.repository.delete(id).await?;
        Ok(ApiResponse::ok())
    }
}
