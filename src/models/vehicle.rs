//! Modelo de vehículo

use serde::Serialize;
use sqlx::FromRow;

/// Vehículo de la flota - mapea la tabla `vehicles`
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub fuel_type: String,
    pub status: String,
    pub avg_consumption: f64,
    pub consumption_unit: String,
    pub calculation_mode: String,
    pub cost_center: Option<String>,
    pub last_refuel: Option<String>,
    pub last_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_json_contract() {
        let vehicle = Vehicle {
            id: "v1".to_string(),
            name: "Truck1".to_string(),
            vehicle_type: "truck".to_string(),
            fuel_type: "diesel".to_string(),
            status: "active".to_string(),
            avg_consumption: 8.5,
            consumption_unit: "km/l".to_string(),
            calculation_mode: "manual".to_string(),
            cost_center: None,
            last_refuel: Some("2024-03-01".to_string()),
            last_location: None,
        };

        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["type"], "truck");
        assert_eq!(json["fuelType"], "diesel");
        assert_eq!(json["avgConsumption"], 8.5);
        assert_eq!(json["consumptionUnit"], "km/l");
        assert_eq!(json["calculationMode"], "manual");
        assert_eq!(json["lastRefuel"], "2024-03-01");
    }
}
