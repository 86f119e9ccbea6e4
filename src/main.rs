use tracing::info;
use db_bootstrap::{config::Config, db::Database, utils::init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.database);

    let database = Database::new(&config.database)?;

    // Verify connectivity before handing the pool out
    database.connect().await?;

    database.close().await;

    Ok(())
}
