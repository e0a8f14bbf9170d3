//! HTTP handlers for the StreetAddress resource
//!
//! [`StreetAddressHandler`] holds the request semantics and is usable without
//! axum; [`router`] mounts it on the `/api/streetaddresses` paths.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use streetaddresses_api::handlers::{router, StreetAddressHandler};
//! use streetaddresses_api::repository::InMemoryRepository;
//!
//! # fn main() -> streetaddresses_api::error::Result<()> {
//! let handler = StreetAddressHandler::builder()
//!     .logger(tracing::info_span!("street_addresses"))
//!     .repository(Arc::new(InMemoryRepository::new()))
//!     .build()?;
//! let app: axum::Router = router(Arc::new(handler));
//! # Ok(())
//! # }
//! ```

mod routes;
mod street_addresses;

pub use routes::router;
pub use street_addresses::{
    location_for, StreetAddressHandler, StreetAddressHandlerBuilder, COLLECTION_PATH, ITEM_PATH,
};
