// db-bootstrap - PostgreSQL pool construction and startup connectivity check

pub mod config;
pub mod db;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use config::{Config, DatabaseConfig, TransportSecurity};
pub use db::{connect_database, create_pool, Database};
pub use types::{AppError, AppResult, ConnectivityError};
