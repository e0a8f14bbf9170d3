//! PostgreSQL connection pool management

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::{
    config::DatabaseConfig,
    error::{Error, Result},
};

/// Create a PostgreSQL connection pool, retrying with exponential backoff
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let mut attempt = 0;
    let base_delay = Duration::from_secs(config.retry_delay_secs);

    loop {
        match try_create_pool(config).await {
            Ok(pool) => {
                tracing::info!(
                    attempts = attempt + 1,
                    max = config.max_connections,
                    min = config.min_connections,
                    "Database connection pool created"
                );
                return Ok(pool);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    tracing::error!(
                        "Failed to connect to database after {} attempts: {}",
                        config.max_retries + 1,
                        e
                    );
                    return Err(e);
                }

                let delay = base_delay * 2_u32.pow(attempt.saturating_sub(1));

                tracing::warn!(
                    "Database connection attempt {} failed: {}. Retrying in {:?}...",
                    attempt,
                    e,
                    delay
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

async fn try_create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| {
            Error::Internal(format!(
                "Failed to connect to database at '{}': {}",
                sanitize_connection_url(&config.url),
                e
            ))
        })
}

/// Mask the password of a connection URL for logging
pub fn sanitize_connection_url(url: &str) -> String {
    if let (Some(scheme_end), Some(at_pos)) = (url.find("://"), url.rfind('@')) {
        let credentials = &url[scheme_end + 3..at_pos];
        if let Some((username, _)) = credentials.split_once(':') {
            return format!("{}{}:***{}", &url[..scheme_end + 3], username, &url[at_pos..]);
        }
    }
    url.to_string()
}
