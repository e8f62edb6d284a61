use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub media_root: PathBuf,
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub struct PurgeConfig {
    pub interval_secs: u64,
    pub retention_days: i64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub storage: StorageConfig,
    pub purge: PurgeConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?;

        let media_root = std::env::var("MEDIA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./media"));

        let public_base_url = std::env::var("MEDIA_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}/media"));

        let interval_secs = std::env::var("PURGE_INTERVAL_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<u64>()
            .context("PURGE_INTERVAL_SECS must be a valid u64 integer")?;

        let retention_days = std::env::var("ARCHIVE_RETENTION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse::<i64>()
            .context("ARCHIVE_RETENTION_DAYS must be a valid i64 integer")?;

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            db_max_conn,
            storage: StorageConfig {
                media_root,
                public_base_url,
            },
            purge: PurgeConfig {
                interval_secs,
                retention_days,
            },
        })
    }
}
