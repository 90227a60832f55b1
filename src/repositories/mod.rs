//! Repositorios
//!
//! Un repositorio por tabla; todo el SQL parametrizado vive aquí.

pub mod log_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use log_repository::LogRepository;
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;
