use serde::Deserialize;

// Request para crear un vehículo
//
// El cliente envía la ubicación como `lastLocationText`; se almacena en
// la columna `last_location`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
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
    pub last_location_text: Option<String>,
}
