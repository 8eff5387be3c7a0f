// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    api_key: String,
    max_connections: u32,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got `{raw}`"))),
        _ => Ok(default),
    }
}

/// Assembles a connection URL from the discrete `DB_*` variables.
fn database_url_from_parts() -> Result<String, ConfigError> {
    let host = var_or("DB_HOST", "localhost");
    let port: u16 = parse_var("DB_PORT", 5432)?;
    let user = var_or("DB_USER", "postgres");
    let password = var_or("DB_PASSWORD", "postgres");
    let name = var_or("DB_NAME", "quillpress");
    Ok(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. `API_KEY` is required;
    /// every other key has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => database_url_from_parts()?,
        };

        let api_key = env::var("API_KEY").map_err(|_| ConfigError::Missing("API_KEY"))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::Invalid("API_KEY must not be empty".into()));
        }

        let host = var_or("HOST", "127.0.0.1");
        let port: u16 = parse_var("PORT", 8080)?;

        let max_connections = parse_var("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DB_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let allowed_origins = split_origins(&var_or("ALLOWED_ORIGINS", "*"));

        Ok(Self {
            database_url,
            listen_addr: format!("{host}:{port}"),
            api_key,
            max_connections,
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// CORS origins; a single `*` allows any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
