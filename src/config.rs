use std::env;

use crate::types::{AppError, AppResult};

/// Deployment mode value that switches transport security on.
pub const PRODUCTION_MODE: &str = "production";

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub secure: bool,
}

/// Transport security applied to every pooled connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportSecurity {
    Disabled,
    /// TLS is negotiated but the server certificate is not verified.
    EnabledWithoutVerification,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>, secure: bool) -> Self {
        Self {
            url: url.into(),
            secure,
        }
    }

    pub fn transport_security(&self) -> TransportSecurity {
        if self.secure {
            TransportSecurity::EnabledWithoutVerification
        } else {
            TransportSecurity::Disabled
        }
    }
}

// The URL usually carries credentials, keep it out of debug output.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("secure", &self.secure)
            .finish()
    }
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;

        let secure = lookup("NODE_ENV").as_deref() == Some(PRODUCTION_MODE);

        Ok(Self {
            database: DatabaseConfig { url, secure },
        })
    }
}
