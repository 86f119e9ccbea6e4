use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::{debug, error, info};

use crate::config::{DatabaseConfig, TransportSecurity};
use crate::types::{AppError, AppResult, ConnectivityError};

pub use pool::*;

pub mod pool;

pub const MAX_CONNECTIONS: u32 = 20;
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(30_000);
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_millis(2_000);

impl TransportSecurity {
    pub fn ssl_mode(self) -> PgSslMode {
        match self {
            TransportSecurity::Disabled => PgSslMode::Disable,
            TransportSecurity::EnabledWithoutVerification => PgSslMode::Require,
        }
    }
}

/// Builds the shared pool without opening any connection.
///
/// Sizing and timeouts are fixed; only the target and the transport
/// security mode come from `config`. Must run inside a Tokio runtime.
pub fn create_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    let security = config.transport_security();
    let options = PgConnectOptions::from_str(&config.url)
        .map_err(AppError::InvalidConnectionTarget)?
        .ssl_mode(security.ssl_mode());

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .idle_timeout(IDLE_TIMEOUT)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy_with(options);

    debug!(
        max_connections = MAX_CONNECTIONS,
        idle_timeout_ms = IDLE_TIMEOUT.as_millis() as u64,
        acquire_timeout_ms = ACQUIRE_TIMEOUT.as_millis() as u64,
        security = ?security,
        "Database pool created"
    );

    Ok(pool)
}

/// Runs one round trip through the pool and logs the outcome.
pub async fn connect_database(pool: &PgPool) -> Result<(), ConnectivityError> {
    let result = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
        .fetch_one(pool)
        .await;

    match result {
        Ok(server_time) => {
            info!(%server_time, "Database connected successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Database connection failed: {}", e);
            Err(ConnectivityError::new(e))
        }
    }
}
