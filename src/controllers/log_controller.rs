use sqlx::PgPool;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::log_dto::CreateLogRequest;
use crate::models::fuel_log::FuelLog;
use crate::repositories::log_repository::LogRepository;
use crate::utils::errors::AppError;

pub struct LogController {
    repository: LogRepository,
}

impl LogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LogRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<FuelLog>, AppError> {
        self.repository.list_all().await
    }

    pub async fn create(&self, request: CreateLogRequest) -> Result<ApiResponse, AppError> {
        self.repository.create(&request).await?;
        Ok(ApiResponse::ok())
    }
}
