//! Inicialización y auto-migración del esquema
//!
//! Crea las tablas automáticamente si no existen y siembra el usuario
//! administrador por defecto. Se ejecuta una sola vez al arrancar, antes
//! de aceptar tráfico.

use sqlx::PgPool;
use tracing::info;

pub const ADMIN_EMAIL: &str = "admin@hotmail.com";
pub const ADMIN_NAME: &str = "Administrador";
pub const ADMIN_PASSWORD: &str = "admin";

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    email VARCHAR(255) PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL
)
"#;

const CREATE_VEHICLES: &str = r#"
CREATE TABLE IF NOT EXISTS vehicles (
    id VARCHAR(50) PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    vehicle_type VARCHAR(50) NOT NULL,
    fuel_type VARCHAR(20) NOT NULL,
    status VARCHAR(20) NOT NULL,
    avg_consumption DOUBLE PRECISION NOT NULL,
    consumption_unit VARCHAR(10) NOT NULL,
    calculation_mode VARCHAR(20) NOT NULL,
    cost_center VARCHAR(100),
    last_refuel VARCHAR(50),
    last_location VARCHAR(255)
)
"#;

const CREATE_LOGS: &str = r#"
CREATE TABLE IF NOT EXISTS logs (
    id VARCHAR(50) PRIMARY KEY,
    vehicle_id VARCHAR(50) NOT NULL REFERENCES vehicles (id) ON DELETE CASCADE,
    vehicle_name VARCHAR(100) NOT NULL,
    date VARCHAR(50) NOT NULL,
    timestamp BIGINT NOT NULL,
    fuel_type VARCHAR(20) NOT NULL,
    input_quantity DOUBLE PRECISION NOT NULL,
    input_type VARCHAR(10) NOT NULL,
    quantity DOUBLE PRECISION NOT NULL,
    unit VARCHAR(10) NOT NULL,
    price_per_unit DOUBLE PRECISION NOT NULL,
    total_cost DOUBLE PRECISION NOT NULL,
    odometer DOUBLE PRECISION,
    hourmeter DOUBLE PRECISION,
    location VARCHAR(255),
    cost_center VARCHAR(100),
    efficiency DOUBLE PRECISION
)
"#;

const CREATE_LOGS_VEHICLE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_logs_vehicle_id ON logs (vehicle_id)";

/// Inicializar el esquema de la base de datos
///
/// Todas las sentencias son idempotentes; un fallo aquí se registra en el
/// arranque pero no impide que el servidor escuche.
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Verificando estructura de la base de datos...");

    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_VEHICLES).execute(pool).await?;
    sqlx::query(CREATE_LOGS).execute(pool).await?;
    sqlx::query(CREATE_LOGS_VEHICLE_INDEX).execute(pool).await?;

    seed_admin_user(pool).await?;

    info!("Base de datos inicializada con éxito");
    Ok(())
}

/// Crear el usuario admin por defecto si no existe
async fn seed_admin_user(pool: &PgPool) -> Result<(), sqlx::Error> {
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(ADMIN_EMAIL)
        .fetch_one(pool)
        .await?;

    if !exists.0 {
        sqlx::query("INSERT INTO users (name, email, password) VALUES ($1, $2, $3)")
            .bind(ADMIN_NAME)
            .bind(ADMIN_EMAIL)
            .bind(ADMIN_PASSWORD)
            .execute(pool)
            .await?;
        info!("Usuario admin creado");
    }

    Ok(())
}
