use sqlx::PgPool;

use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listar todos los vehículos, sin filtrar ni paginar
    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    /// Insertar un vehículo con el id que aporta el cliente
    ///
    /// Un id duplicado viola la clave primaria y se propaga como error de
    /// base de datos.
    pub async fn create(&self, vehicle: &CreateVehicleRequest) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO vehicles (
                id, name, vehicle_type, fuel_type, status, avg_consumption,
                consumption_unit, calculation_mode, cost_center, last_refuel, last_location
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&vehicle.id)
        .bind(&vehicle.name)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.fuel_type)
        .bind(&vehicle.status)
        .bind(vehicle.avg_consumption)
        .bind(&vehicle.consumption_unit)
        .bind(&vehicle.calculation_mode)
        .bind(&vehicle.cost_center)
        .bind(&vehicle.last_refuel)
        .bind(&vehicle.last_location_text)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Borrar un vehículo por id
    ///
    /// Los registros asociados caen en cascada (FK ON DELETE CASCADE).
    /// Borrar un id inexistente no es un error.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
