use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use sqlx::{Pool, Postgres};
use storefront::{
    domain::requests::product::FindAllProducts, handler::AppRouter,
    scheduler::spawn_purge_scheduler, state::AppState,
};
use tokio::sync::broadcast;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("storefront", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting storefront service initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(db_pool, &config);

    // Prime the catalog feed so early subscribers get a real snapshot.
    match state
        .di_container
        .product_query
        .find_catalog(&FindAllProducts::default())
        .await
    {
        Ok(initial) => state.di_container.catalog_feed.publish(initial.data),
        Err(err) => warn!("Failed to prime catalog feed: {err}"),
    }

    let (shutdown_tx, _shutdown_rx) = broadcast::channel::<()>(1);

    let purge_handle = spawn_purge_scheduler(
        state.di_container.product_command.clone(),
        config.purge.interval_secs,
        shutdown_tx.clone(),
    );

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, config.storage.media_root.clone(), state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down background workers...");

    let _ = shutdown_tx.send(());
    let _ = purge_handle.await;

    info!("✅ Storefront service shutdown complete.");

    Ok(())
}

pub async fn run_migrations(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
