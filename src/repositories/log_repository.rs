use sqlx::PgPool;

use crate::dto::log_dto::CreateLogRequest;
use crate::models::fuel_log::FuelLog;
use crate::utils::errors::AppError;

pub struct LogRepository {
    pool: PgPool,
}

impl LogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listar todos los registros, del más reciente al más antiguo
    pub async fn list_all(&self) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>("SELECT * FROM logs ORDER BY timestamp DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(logs)
    }

    /// Insertar un registro y denormalizar el estado del vehículo
    ///
    /// Las dos sentencias van en una única transacción: si la
    /// actualización del vehículo falla, el insert se revierte. Un
    /// `vehicle_id` inexistente viola la FK y aborta la transacción.
    pub async fn create(&self, log: &CreateLogRequest) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO logs (
                id, vehicle_id, vehicle_name, date, timestamp, fuel_type,
                input_quantity, input_type, quantity, unit, price_per_unit,
                total_cost, odometer, hourmeter, location, cost_center, efficiency
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(&log.id)
        .bind(&log.vehicle_id)
        .bind(&log.vehicle_name)
        .bind(&log.date)
        .bind(log.timestamp)
        .bind(&log.fuel_type)
        .bind(log.input_quantity)
        .bind(&log.input_type)
        .bind(log.quantity)
        .bind(&log.unit)
        .bind(log.price_per_unit)
        .bind(log.total_cost)
        .bind(log.odometer)
        .bind(log.hourmeter)
        .bind(&log.location)
        .bind(&log.cost_center)
        .bind(log.efficiency)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET last_refuel = $1, last_location = $2 WHERE id = $3")
            .bind(&log.date)
            .bind(&log.location)
            .bind(&log.vehicle_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
