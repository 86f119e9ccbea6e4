use sqlx::postgres::PgPool;

use crate::config::DatabaseConfig;
use crate::types::{AppResult, ConnectivityError};

/// Shared database handle.
///
/// Built once at startup and cloned into whatever needs database access;
/// clones share the same underlying pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        Ok(Self::from_pool(super::create_pool(config)?))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn connect(&self) -> Result<(), ConnectivityError> {
        super::connect_database(&self.pool).await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
