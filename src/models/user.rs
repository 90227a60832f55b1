//! Modelo de usuario
//!
//! Mapea la tabla `users`. No deriva `Serialize` a propósito: la
//! contraseña nunca debe salir por la API.

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub email: String,
    pub name: String,
    pub password: String,
}
