//! Application settings and configuration structures.

use std::net::SocketAddr;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (SQLite)
    pub database: DatabaseSettings,

    /// JWT authentication settings
    pub jwt: JwtSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// SQLite database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL, e.g. `sqlite://chat.db` or `sqlite::memory:`
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

/// JWT authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens
    pub secret: String,

    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
}

/// Minimum required length for JWT secret (256 bits = 32 bytes)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. `APP__` prefixed environment variables
    /// 5. `CHAT_API_HOST`, `CHAT_API_PORT`, `DATABASE_URL`, `JWT_SECRET`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the JWT secret is missing or too short.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5001)?
            .set_default("database.url", "sqlite://chat.db")?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("jwt.access_token_expiry_minutes", 15)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=5001 -> server.port = 5001
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("CHAT_API_HOST").ok())?
            .set_override_option("server.port", std::env::var("CHAT_API_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .build()?
            .try_deserialize()
            .and_then(Self::validate)
    }

    /// Reject settings the server cannot run safely with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "JWT secret must be at least {} characters. Current length: {}",
                MIN_JWT_SECRET_LENGTH,
                self.jwt.secret.len()
            )));
        }
        if self.jwt.access_token_expiry_minutes <= 0 {
            return Err(ConfigError::Message(
                "jwt.access_token_expiry_minutes must be positive".into(),
            ));
        }
        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerSettings {
    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl DatabaseSettings {
    /// Get the connection URL.
    pub fn connection_url(&self) -> &str {
        &self.url
    }
}
