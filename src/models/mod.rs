//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al esquema PostgreSQL. Los nombres JSON siguen el contrato camelCase
//! de la API.

pub mod fuel_log;
pub mod user;
pub mod vehicle;

pub use fuel_log::FuelLog;
pub use user::User;
pub use vehicle::Vehicle;
