//! Tests de integración de la API
//!
//! Conducen el router real con `tower::ServiceExt::oneshot`. No hay
//! PostgreSQL en CI, así que el pool apunta a una dirección inalcanzable:
//! eso permite verificar el health check, el enrutado y el contrato
//! uniforme de error 500 de las rutas de datos.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;

use ecofuel_backend::config::database::DatabaseConfig;
use ecofuel_backend::config::environment::EnvironmentConfig;
use ecofuel_backend::{create_app, AppState};

/// Crear la app con un pool perezoso hacia una base inalcanzable
fn create_test_app() -> Router {
    let db_config = DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        user: "ecofuel".to_string(),
        password: "ecofuel".to_string(),
        database: "ecofuel".to_string(),
        max_connections: 2,
        acquire_timeout: Duration::from_secs(2),
        idle_timeout: Duration::from_secs(60),
    };
    let config = EnvironmentConfig {
        environment: "development".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    create_app(AppState::new(db_config.create_pool(), config))
}

async fn get_request(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_request(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let response_body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(response_body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = get_request(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "EcoFuel Backend is running!");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app();
    let (status, _) = get_request(&app, "/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_rejects_get() {
    let app = create_test_app();
    let (status, _) = get_request(&app, "/api/login").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("origin", "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_list_vehicles_surfaces_database_error_uniformly() {
    let app = create_test_app();
    let (status, body) = get_request(&app, "/api/vehicles").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_list_logs_surfaces_database_error_uniformly() {
    let app = create_test_app();
    let (status, body) = get_request(&app, "/api/logs").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_login_surfaces_database_error_uniformly() {
    let app = create_test_app();
    let (status, body) = post_request(
        &app,
        "/api/login",
        json!({ "email": "admin@hotmail.com", "password": "admin" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_register_surfaces_database_error_uniformly() {
    let app = create_test_app();
    let (status, body) = post_request(
        &app,
        "/api/register",
        json!({ "name": "Test", "email": "test@test.com", "password": "secret" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_create_vehicle_rejects_incomplete_body() {
    let app = create_test_app();
    // Falta la mayor parte de los campos obligatorios: el rechazo ocurre
    // en la deserialización, sin tocar la base de datos
    let (status, _) = post_request(&app, "/api/vehicles", json!({ "id": "v1" })).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_create_log_rejects_incomplete_body() {
    let app = create_test_app();
    let (status, _) = post_request(&app, "/api/logs", json!({ "id": "l1" })).await;

    assert!(status.is_client_error());
}
