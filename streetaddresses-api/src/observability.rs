//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize JSON tracing output filtered by `service.log_level`
///
/// Invalid filter directives fall back to `info`. Calling this twice is
/// harmless; the second subscriber is ignored.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = &config.service.log_level;

    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            environment = %config.service.environment,
            "Tracing initialized for service: {}", config.service.name
        );
    }

    Ok(())
}

/// Flush and shut down tracing
pub fn shutdown_tracing() {
    tracing::info!("Tracing shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        let config = Config::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }
}
