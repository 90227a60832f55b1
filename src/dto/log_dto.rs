use serde::Deserialize;

// Request para crear un registro de repostaje
//
// Todos los valores derivados (cantidad, coste total, eficiencia) los
// calcula el cliente; el servicio los almacena sin recalcular.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogRequest {
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
    fn test_deserialize_camel_case_body() {
        let body = serde_json::json!({
            "id": "l1",
            "vehicleId": "v1",
            "vehicleName": "Truck1",
            "date": "2024-03-01",
            "timestamp": 1709251200000i64,
            "fuelType": "diesel",
            "inputQuantity": 40.0,
            "inputType": "liters",
            "quantity": 40.0,
            "unit": "l",
            "pricePerUnit": 1.5,
            "totalCost": 60.0,
            "location": "Madrid"
        });

        let request: CreateLogRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.vehicle_id, "v1");
        assert_eq!(request.timestamp, 1709251200000);
        assert_eq!(request.price_per_unit, 1.5);
        assert_eq!(request.odometer, None);
        assert_eq!(request.location.as_deref(), Some("Madrid"));
    }
}
