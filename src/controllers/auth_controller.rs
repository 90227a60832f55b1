use sqlx::PgPool;

use crate::dto::auth_dto::{ApiResponse, LoginRequest, LoginResponse, RegisterRequest};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    /// Login con comparación exacta de contraseña
    ///
    /// Email desconocido -> 404; contraseña incorrecta -> 401. La
    /// contraseña nunca vuelve en la respuesta.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        if user.password != request.password {
            return Err(AppError::Unauthorized("Contraseña incorrecta".to_string()));
        }

        Ok(LoginResponse::success(user.name, user.email))
    }

    /// Registro de usuario
    ///
    /// Un email ya registrado responde fallo suave (HTTP 200 con
    /// `success: false`), no un error. La ventana entre la comprobación
    /// y el insert la cierra la clave primaria: el segundo insert
    /// concurrente falla como error de base de datos.
    pub async fn register(&self, request: RegisterRequest) -> Result<ApiResponse, AppError> {
        if self.repository.email_exists(&request.email).await? {
            return Ok(ApiResponse::error("El e-mail ya está registrado"));
        }

        self.repository
            .create(&request.name, &request.email, &request.password)
            .await?;

        Ok(ApiResponse::ok())
    }
}
