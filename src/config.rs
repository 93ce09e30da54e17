//! Service configuration parsed from environment variables.
//!
//! Required:
//! - `DATABASE_URL`
//!
//! Optional:
//! - `PORT`: default 3000
//! - `DB_MAX_CONNECTIONS`: default 5
//! - `RANDOM_MIN_STRUCTURE_LEN`: default 50
//! - `CATEGORY_LABELS_PATH`: replaces the built-in category label table
//! - `APP_ENV`: `production` loads `.env.production` instead of `.env`

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_RANDOM_MIN_STRUCTURE_LEN: i32 = 50;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub random_min_structure_len: i32,
    pub category_labels_path: Option<PathBuf>,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `DATABASE_URL` is missing or `PORT` is not
    /// a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            port,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            random_min_structure_len: env_parse("RANDOM_MIN_STRUCTURE_LEN", DEFAULT_RANDOM_MIN_STRUCTURE_LEN),
            category_labels_path: std::env::var_os("CATEGORY_LABELS_PATH").map(PathBuf::from),
        })
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Dotenv file for the given `APP_ENV` value.
#[must_use]
pub fn dotenv_file(app_env: Option<&str>) -> &'static str {
    match app_env {
        Some("production") => ".env.production",
        _ => ".env",
    }
}

/// Load the dotenv file selected by `APP_ENV`. A missing file is not an error.
pub fn load_dotenv() {
    let file = dotenv_file(std::env::var("APP_ENV").ok().as_deref());
    match dotenvy::from_filename(file) {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, file, "failed to load environment file"),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
