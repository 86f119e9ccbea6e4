// Logger initialization

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "db_bootstrap=debug,sqlx=warn";

/// Installs the global subscriber; `RUST_LOG` overrides the default filter.
///
/// Safe to call more than once, later calls leave the first subscriber in place.
pub fn init_logger() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
