//! Middleware de CORS
//!
//! La API se consume desde un frontend servido en otro origen, así que
//! CORS va abierto sobre todo el router.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS
/// NOTA: Permite cualquier origen - igual que el frontend espera
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
