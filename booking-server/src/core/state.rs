//! Server state

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state - cheap to clone, one copy per request
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the database (running migrations) and assemble the state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }
}
