use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::auth::models::Session;
use crate::modules::auth::repositories::AuthRepository;

/// Issued on successful login; the token goes into the Authorization header
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Service for login and session lifecycle
pub struct AuthService {
    auth_repo: Arc<AuthRepository>,
    session_ttl_hours: u32,
}

impl AuthService {
    pub fn new(auth_repo: Arc<AuthRepository>, session_ttl_hours: u32) -> Self {
        Self {
            auth_repo,
            session_ttl_hours,
        }
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let account = self
            .auth_repo
            .find_account_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !verify_password(password, &account.password_hash) {
            warn!(email = %account.email, "failed login attempt");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let session = Session::issue(account.id, self.session_ttl_hours);
        self.auth_repo.insert_session(&session).await?;

        info!(account_id = %account.id, "session issued");
        Ok(LoginResponse {
            token: session.token,
            expires_at: session.expires_at,
        })
    }

    /// Revoke the presented session token. Revoking an already-gone token is
    /// not an error.
    pub async fn logout(&self, token: &str) -> Result<()> {
        let token = Uuid::parse_str(token)
            .map_err(|_| AppError::unauthorized("Invalid session token"))?;

        let removed = self.auth_repo.delete_session(token).await?;
        if removed {
            info!("session revoked");
        }
        Ok(())
    }
}

/// Hash a password into an argon2 PHC string (used when seeding accounts)
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Constant-time verification of a password against a stored hash. An
/// unparseable stored hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
