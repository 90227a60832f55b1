//! Módulo de base de datos
//!
//! Maneja la inicialización del esquema en PostgreSQL.

pub mod schema;

pub use schema::init_database;
