use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::auth::services::AuthService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Log in with email + password, receiving a session token
/// POST /auth/login
pub async fn login(
    service: web::Data<Arc<AuthService>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(&request.email, &request.password).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Revoke the presented session token
/// POST /auth/logout
pub async fn logout(
    service: web::Data<Arc<AuthService>>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or_else(|| AppError::unauthorized("Missing bearer token"))?;

    service.logout(token).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout)),
    );
}
