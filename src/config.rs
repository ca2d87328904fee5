//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! Configuration is loaded once at startup and handed to the components that need it.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_BLOB_CONTAINER, DEFAULT_BLOB_STORAGE_ROOT, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_JWT_AUDIENCE, DEFAULT_JWT_EXPIRY_DAYS, DEFAULT_JWT_ISSUER, MAX_JWT_EXPIRY_DAYS, DEFAULT_REDIS_URL,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Relational store configuration (users)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Document store configuration (championships)
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// Bearer token configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiry_days: i64,
}

/// Blob storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding one sub-directory per container
    pub root: PathBuf,
    /// Container for per-user championship records
    pub container: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Self {
        Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
        }
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_JWT_ISSUER.to_string()),
            audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_JWT_AUDIENCE.to_string()),
            expiry_days: match env::var("JWT_EXPIRY_DAYS") {
                Ok(raw) => parse_expiry_days(&raw)?,
                Err(_) => DEFAULT_JWT_EXPIRY_DAYS,
            },
        };

        if config.secret.is_empty() {
            return Err(ConfigError::InvalidValue("JWT_SECRET".to_string()));
        }

        Ok(config)
    }
}

/// Token lifetime in days, within `1..=MAX_JWT_EXPIRY_DAYS`
fn parse_expiry_days(raw: &str) -> Result<i64, ConfigError> {
    match raw.trim().parse::<i64>() {
        Ok(days) if (1..=MAX_JWT_EXPIRY_DAYS).contains(&days) => Ok(days),
        _ => Err(ConfigError::InvalidValue("JWT_EXPIRY_DAYS".to_string())),
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let container =
            env::var("BLOB_CONTAINER").unwrap_or_else(|_| DEFAULT_BLOB_CONTAINER.to_string());

        // The container name becomes a directory name
        if container.is_empty() || container.contains(['/', '\\']) || container == ".." {
            return Err(ConfigError::InvalidValue("BLOB_CONTAINER".to_string()));
        }

        Ok(Self {
            root: PathBuf::from(
                env::var("BLOB_STORAGE_ROOT").unwrap_or_else(|_| DEFAULT_BLOB_STORAGE_ROOT.to_string()),
            ),
            container,
        })
    }

    /// Directory of the configured container
    pub fn container_path(&self) -> PathBuf {
        self.root.join(&self.container)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
