//! Controladores
//!
//! La lógica de decisión de cada recurso, entre las rutas y los
//! repositorios.

pub mod auth_controller;
pub mod log_controller;
pub mod vehicle_controller;

pub use auth_controller::AuthController;
pub use log_controller::LogController;
pub use vehicle_controller::VehicleController;
