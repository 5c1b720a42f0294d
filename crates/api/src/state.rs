use std::sync::Arc;

use faal_db::faal_store::{self, PgFaalAssigner};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: faal_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Daily faal assigner wired to the pool and the configured schedule.
    pub assigner: Arc<PgFaalAssigner>,
}

impl AppState {
    pub fn new(pool: faal_db::DbPool, config: ServerConfig) -> Self {
        let assigner = faal_store::assigner(&pool, config.faal);
        Self {
            pool,
            config: Arc::new(config),
            assigner: Arc::new(assigner),
        }
    }
}
