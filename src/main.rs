use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;

use ecofuel_backend::config::database::DatabaseConfig;
use ecofuel_backend::config::environment::EnvironmentConfig;
use ecofuel_backend::create_app;
use ecofuel_backend::database::init_database;
use ecofuel_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("⛽ EcoFuel Backend - Seguimiento de combustible");
    info!("==============================================");

    let config = EnvironmentConfig::default();
    let db_config = DatabaseConfig::default();

    // Pool perezoso: el proceso arranca aunque la base no responda todavía
    let pool = db_config.create_pool();

    // Inicializar el esquema antes de aceptar tráfico. Un fallo se
    // registra pero no detiene el arranque: las requests posteriores
    // devolverán el error de base de datos correspondiente.
    if let Err(e) = init_database(&pool).await {
        error!("❌ Error inicializando la base de datos: {}", e);
    }

    let state = AppState::new(pool, config.clone());
    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Health check");
    info!("   POST   /api/login - Login de usuario");
    info!("   POST   /api/register - Registro de usuario");
    info!("   GET    /api/vehicles - Listar vehículos");
    info!("   POST   /api/vehicles - Crear vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("   GET    /api/logs - Listar repostajes");
    info!("   POST   /api/logs - Registrar repostaje");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
