// src/config/db.rs
// DOCUMENTATION: Spatial store connection pool
// PURPOSE: Bound how many POI queries can run against PostGIS at once

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Idle connections are closed after 5 minutes
const IDLE_TIMEOUT_SECS: u64 = 300;
/// Connections are recycled after 30 minutes
const MAX_LIFETIME_SECS: u64 = 1800;

/// Pool settings derived from the configuration
/// DOCUMENTATION: Capacity is DB_MAX_CONNECTIONS (10 by default). A request
/// arriving while every connection is checked out waits up to
/// DB_CONNECTION_TIMEOUT seconds, then fails as a data access error.
fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        .idle_timeout(Duration::from_secs(IDLE_TIMEOUT_SECS))
        .max_lifetime(Duration::from_secs(MAX_LIFETIME_SECS))
}

/// Open the pool and check the store answers before serving traffic
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!(
        "Opening spatial store pool ({} connections, {}s acquire timeout)",
        config.db_max_connections,
        config.db_connection_timeout
    );

    let pool = pool_options(config).connect(&config.database_url).await?;
    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!("Spatial store reachable");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_options_follow_config() {
        let config = Config {
            db_max_connections: 4,
            db_connection_timeout: 7,
            ..Config::default()
        };

        let options = pool_options(&config);
        assert_eq!(options.get_max_connections(), 4);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(7));
        assert_eq!(
            options.get_max_lifetime(),
            Some(Duration::from_secs(MAX_LIFETIME_SECS))
        );
    }

    #[test]
    fn test_default_pool_capacity() {
        let options = pool_options(&Config::default());
        assert_eq!(options.get_max_connections(), 10);
    }
}
