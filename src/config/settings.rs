//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use super::constants::{
    DEFAULT_APP_NAME, DEFAULT_CORS_ALLOW_ORIGINS, DEFAULT_JWT_ACCESS_EXPIRES_SECONDS,
    DEFAULT_JWT_REFRESH_EXPIRES_SECONDS, DEFAULT_POSTGRES_DB, DEFAULT_POSTGRES_HOST,
    DEFAULT_POSTGRES_PASSWORD, DEFAULT_POSTGRES_PORT, DEFAULT_POSTGRES_USER, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH, RATE_LIMIT_REQUESTS, RATE_LIMIT_WINDOW_SECONDS,
};

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JWT_SECRET_KEY environment variable must be set in production")]
    MissingJwtSecret,

    #[error("JWT_SECRET_KEY must be at least {0} characters long")]
    JwtSecretTooShort(usize),

    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub app_name: String,
    jwt_secret: String,
    pub jwt_access_expires: i64,
    pub jwt_refresh_expires: i64,
    pub auth_required: bool,
    pub cors_allow_origins: Vec<String>,
    pub rate_limit_max: u64,
    pub rate_limit_window_seconds: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("app_name", &self.app_name)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_access_expires", &self.jwt_access_expires)
            .field("jwt_refresh_expires", &self.jwt_refresh_expires)
            .field("auth_required", &self.auth_required)
            .field("cors_allow_origins", &self.cors_allow_origins)
            .field("rate_limit_max", &self.rate_limit_max)
            .field("rate_limit_window_seconds", &self.rate_limit_window_seconds)
            .finish()
    }
}

/// HTTP-layer settings handed to the router.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub auth_required: bool,
    pub cors_allow_origins: Vec<String>,
    pub rate_limit_max: u64,
    pub rate_limit_window_seconds: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            auth_required: false,
            cors_allow_origins: split_list(DEFAULT_CORS_ALLOW_ORIGINS),
            rate_limit_max: RATE_LIMIT_REQUESTS,
            rate_limit_window_seconds: RATE_LIMIT_WINDOW_SECONDS,
        }
    }
}

/// Signing settings handed to the token manager.
#[derive(Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub issuer: String,
    pub access_expires: i64,
    pub refresh_expires: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = match env::var("JWT_SECRET_KEY") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET_KEY not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            }
            Err(_) => return Err(ConfigError::MissingJwtSecret),
        };

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::JwtSecretTooShort(MIN_JWT_SECRET_LENGTH));
        }

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => format!(
                "postgres://{}:{}@{}:{}/{}",
                var_or("POSTGRES_USER", DEFAULT_POSTGRES_USER),
                var_or("POSTGRES_PASSWORD", DEFAULT_POSTGRES_PASSWORD),
                var_or("POSTGRES_HOST", DEFAULT_POSTGRES_HOST),
                parse_var("POSTGRES_PORT", DEFAULT_POSTGRES_PORT)?,
                var_or("POSTGRES_DB", DEFAULT_POSTGRES_DB),
            ),
        };

        Ok(Self {
            database_url,
            server_host: var_or("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            app_name: var_or("APP_NAME", DEFAULT_APP_NAME),
            jwt_secret,
            jwt_access_expires: parse_var("JWT_ACCESS_EXPIRES", DEFAULT_JWT_ACCESS_EXPIRES_SECONDS)?,
            jwt_refresh_expires: parse_var(
                "JWT_REFRESH_EXPIRES",
                DEFAULT_JWT_REFRESH_EXPIRES_SECONDS,
            )?,
            auth_required: parse_var("AUTH_REQUIRED", false)?,
            cors_allow_origins: split_list(&var_or(
                "CORS_ALLOW_ORIGINS",
                DEFAULT_CORS_ALLOW_ORIGINS,
            )),
            rate_limit_max: parse_var("RATE_LIMIT_MAX", RATE_LIMIT_REQUESTS)?,
            rate_limit_window_seconds: parse_var(
                "RATE_LIMIT_WINDOW_SECONDS",
                RATE_LIMIT_WINDOW_SECONDS,
            )?,
        })
    }

    /// Settings consumed by the token manager.
    pub fn token_settings(&self) -> TokenSettings {
        TokenSettings {
            secret: self.jwt_secret.clone(),
            issuer: self.app_name.clone(),
            access_expires: self.jwt_access_expires,
            refresh_expires: self.jwt_refresh_expires,
        }
    }

    /// Settings consumed by the router and middleware.
    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            auth_required: self.auth_required,
            cors_allow_origins: self.cors_allow_origins.clone(),
            rate_limit_max: self.rate_limit_max,
            rate_limit_window_seconds: self.rate_limit_window_seconds,
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_skips_empty() {
        assert_eq!(
            split_list(" http://a.test , ,https://b.test"),
            vec!["http://a.test".to_string(), "https://b.test".to_string()]
        );
    }

    #[test]
    fn test_http_settings_defaults() {
        let settings = HttpSettings::default();
        assert!(!settings.auth_required);
        assert_eq!(settings.rate_limit_max, 20);
        assert_eq!(settings.rate_limit_window_seconds, 60);
        assert_eq!(settings.cors_allow_origins.len(), 2);
    }
}
