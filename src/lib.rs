//! EcoFuel Backend
//!
//! Backend HTTP para el seguimiento de combustible de una flota de
//! vehículos: autenticación de usuarios, registro de vehículos y
//! registros de repostaje, todo persistido en PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
