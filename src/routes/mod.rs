//! Rutas de la API
//!
//! Este módulo compone el router principal: health check en la raíz y
//! los recursos bajo `/api`.

pub mod auth_routes;
pub mod log_routes;
pub mod vehicle_routes;

use axum::{routing::get, Router};

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes::create_auth_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/logs", log_routes::create_log_router())
}

/// Crear la aplicación completa con middleware y estado
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/api", create_api_router())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check: solo demuestra que el proceso responde, no que la base
/// de datos esté accesible
async fn health_check() -> &'static str {
    "EcoFuel Backend is running!"
}
