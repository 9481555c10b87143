use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Origin allowed by CORS (the web frontend)
    pub allowed_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// How long issued sessions stay valid
    pub session_ttl_hours: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                allowed_origin: env::var("ALLOWED_ORIGIN").ok(),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            auth: AuthConfig {
                session_ttl_hours: env::var("SESSION_TTL_HOURS")
                    .unwrap_or_else(|_| "168".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid SESSION_TTL_HOURS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.session_ttl_hours == 0 {
            return Err(AppError::Configuration(
                "Session TTL must be greater than 0".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
