use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::log_controller::LogController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::log_dto::CreateLogRequest;
use crate::models::fuel_log::FuelLog;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_log_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs))
        .route("/", post(create_log))
}

async fn list_logs(State(state): State<AppState>) -> Result<Json<Vec<FuelLog>>, AppError> {
    let controller = LogController::new(state.pool.clone());
    let logs = controller.list().await?;
    Ok(Json(logs))
}

async fn create_log(
    State(state): State<AppState>,
    Json(request): Json<CreateLogRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let controller = LogController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}
