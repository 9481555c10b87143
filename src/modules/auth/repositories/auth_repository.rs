// AuthRepository: account lookup and session persistence

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::auth::models::{Account, Session};

/// Repository for account and session database operations
pub struct AuthRepository {
    pool: PgPool,
}

impl AuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up an account by email (emails are stored lowercase)
    pub async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, password_hash
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(account)
    }

    /// Persist a freshly issued session
    pub async fn insert_session(&self, session: &Session) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (token, account_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.token)
        .bind(session.account_id)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(())
    }

    /// Revoke a session. Returns whether a row was removed.
    pub async fn delete_session(&self, token: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}
