use std::sync::Arc;
use std::time::{Duration, Instant};

use sqlx::SqlitePool;

use crate::auth::{JwtService, RateLimiter};
use crate::core::{Config, Result};
use crate::db;

/// Interval between rate limiter sweeps
const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// State shared by every handler. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    pub rate_limiter: RateLimiter,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config: Arc::new(config),
            pool,
            jwt_service,
            rate_limiter: RateLimiter::new(),
            started_at: Instant::now(),
        }
    }

    /// Open the database, run migrations and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let pool = db::connect(&config.database_url, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), pool))
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Periodic housekeeping
    pub fn start_background_tasks(&self) {
        let limiter = self.rate_limiter.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(RATE_LIMIT_CLEANUP_INTERVAL);
            loop {
                interval.tick().await;
                limiter.cleanup().await;
            }
        });
    }
}
