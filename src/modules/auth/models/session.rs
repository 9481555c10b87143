use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A login account. Password hashes are argon2 PHC strings; the plaintext
/// never leaves the login handler.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// A server-side session: an opaque bearer token with an expiry. Presenting
/// the token is the only way to reach the gated routes.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Session {
    pub token: Uuid,
    pub account_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Mint a fresh session for an account
    pub fn issue(account_id: Uuid, ttl_hours: u32) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4(),
            account_id,
            created_at: now,
            expires_at: now + Duration::hours(i64::from(ttl_hours)),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
