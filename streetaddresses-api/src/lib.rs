//! # streetaddresses-api
//!
//! HTTP resource endpoint for street address records.
//!
//! ## Features
//!
//! - **Resource routes**: `GET`/`HEAD /api/streetaddresses/{id}`, `POST /api/streetaddresses`
//! - **Pluggable storage**: any [`Repository`](repository::Repository) implementation;
//!   in-memory by default, PostgreSQL behind the `database` feature
//! - **Middleware stack**: request tracking, panic recovery, body size limits, CORS
//! - **Health checks**: liveness and readiness probes
//! - **Graceful shutdown**: proper signal handling (SIGTERM, SIGINT)
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use streetaddresses_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let handler = StreetAddressHandler::builder()
//!         .logger(tracing::info_span!("street_addresses"))
//!         .repository(Arc::new(InMemoryRepository::with_seed(config.storage.seed.clone())))
//!         .build()?;
//!
//!     let app = app(&config, Arc::new(handler));
//!     Server::new(config).serve(app).await
//! }
//! ```

use std::sync::Arc;

use axum::Router;

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod responses;
pub mod server;

#[cfg(feature = "database")]
pub mod database;

#[cfg(test)]
mod testing;

use config::Config;
use handlers::StreetAddressHandler;
use health::HealthState;
use models::StreetAddress;
use repository::Repository;

/// Compose the resource routes with the health routes
///
/// The readiness probe checks the same repository the handler uses.
pub fn app<R>(config: &Config, handler: Arc<StreetAddressHandler<R>>) -> Router
where
    R: Repository<StreetAddress, i32> + 'static,
{
    let health = HealthState::new(config.service.name.clone(), handler.repository().clone());

    handlers::router(handler).merge(health::router(health))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app;
    pub use crate::config::{Config, DatabaseConfig, MiddlewareConfig, ServiceConfig, StorageConfig};
    pub use crate::error::{Error, ErrorResponse, Result};
    pub use crate::handlers::{
        location_for, router, StreetAddressHandler, StreetAddressHandlerBuilder, COLLECTION_PATH,
        ITEM_PATH,
    };
    pub use crate::health::{health, readiness, HealthState};
    pub use crate::ids::{MakeTypedRequestId, RequestId, RequestIdError};
    pub use crate::middleware::{
        request_id_layer, request_id_propagation_layer, sensitive_headers_layer, SENSITIVE_HEADERS,
    };
    pub use crate::models::StreetAddress;
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        InMemoryRepository, Keyed, Repository, RepositoryError, RepositoryErrorKind,
        RepositoryOperation, RepositoryResult,
    };
    pub use crate::responses::{Created, NoContent};
    pub use crate::server::Server;

    #[cfg(feature = "database")]
    pub use crate::database::create_pool;

    #[cfg(feature = "database")]
    pub use crate::repository::PgStreetAddressRepository;

    pub use axum::Router;
}
