// Error types

/// The liveness query could not complete.
///
/// Network failures, rejected credentials, acquire timeouts and server-side
/// errors all land here; the original `sqlx::Error` is kept as the source.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ConnectivityError(#[source] sqlx::Error);

impl ConnectivityError {
    pub fn new(cause: sqlx::Error) -> Self {
        Self(cause)
    }

    pub fn cause(&self) -> &sqlx::Error {
        &self.0
    }
}

impl From<sqlx::Error> for ConnectivityError {
    fn from(err: sqlx::Error) -> Self {
        Self(err)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid connection target: {0}")]
    InvalidConnectionTarget(#[source] sqlx::Error),

    #[error("Database connection failed: {0}")]
    Connectivity(#[from] ConnectivityError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
