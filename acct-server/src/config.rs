use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: data/accounts.db)
    pub database_path: PathBuf,

    /// JWT secret for HS256 session tokens (required)
    pub jwt_secret: String,

    /// Session token lifetime in seconds (default: 86400)
    pub session_ttl_secs: i64,

    /// Max-Age of the anonymous-user-id cookie (default: 1 year)
    pub anon_cookie_max_age_secs: i64,

    /// Log level (default: info)
    pub log_level: LevelFilter,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ServerError::Config {
            message: "JWT_SECRET must be set".to_string(),
        })?;

        let config = Self {
            bind_addr,

            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/accounts.db")),

            jwt_secret,

            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86_400),

            anon_cookie_max_age_secs: std::env::var("ANON_COOKIE_MAX_AGE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(31_536_000),

            log_level: std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| LevelFilter::from_str(&s).ok())
                .unwrap_or(LevelFilter::Info),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ServerErrorResult<()> {
        if self.jwt_secret.len() < 32 {
            return Err(ServerError::Config {
                message: "JWT_SECRET must be at least 32 bytes".to_string(),
            });
        }

        if self.session_ttl_secs <= 0 {
            return Err(ServerError::Config {
                message: "SESSION_TTL_SECS must be positive".to_string(),
            });
        }

        if self.anon_cookie_max_age_secs <= 0 {
            return Err(ServerError::Config {
                message: "ANON_COOKIE_MAX_AGE_SECS must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// Log a redacted configuration summary at startup
    pub fn log_summary(&self) {
        log::info!("Bind address: {}", self.bind_addr);
        log::info!("Database: {}", self.database_path.display());
        log::info!("Session TTL: {}s", self.session_ttl_secs);
        log::info!(
            "Anonymous cookie Max-Age: {}s",
            self.anon_cookie_max_age_secs
        );
        log::info!("Log level: {:?}", self.log_level);
    }
}
