//! Modelo de registro de repostaje

use serde::Serialize;
use sqlx::FromRow;

/// Registro de repostaje - mapea la tabla `logs`
///
/// `timestamp` es la clave de ordenación de los listados; los valores
/// derivados (`total_cost`, `efficiency`) los calcula el cliente y se
/// almacenan tal cual.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FuelLog {
    pub id: String,
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub date: String,
    pub timestamp: i64,
    pub fuel_type: String,
    pub input_quantity: f64,
    pub input_type: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub total_cost: f64,
    pub odometer: Option<f64>,
    pub hourmeter: Option<f64>,
    pub location: Option<String>,
    pub cost_center: Option<String>,
    pub efficiency: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_log_json_contract() {
        let log = FuelLog {
            id: "l1".to_string(),
            vehicle_id: "v1".to_string(),
            vehicle_name: "Truck1".to_string(),
            date: "2024-03-01".to_string(),
            timestamp: 1709251200000,
            fuel_type: "diesel".to_string(),
            input_quantity: 40.0,
            input_type: "liters".to_string(),
            quantity: 40.0,
            unit: "l".to_string(),
            price_per_unit: 1.5,
            total_cost: 60.0,
            odometer: Some(123456.0),
            hourmeter: None,
            location: Some("Depósito central".to_string()),
            cost_center: None,
            efficiency: None,
        };

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["vehicleId"], "v1");
        assert_eq!(json["vehicleName"], "Truck1");
        assert_eq!(json["pricePerUnit"], 1.5);
        assert_eq!(json["totalCost"], 60.0);
        assert_eq!(json["inputQuantity"], 40.0);
        assert_eq!(json["timestamp"], 1709251200000i64);
    }
}
