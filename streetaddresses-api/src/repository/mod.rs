//! Repository abstraction for StreetAddress persistence
//!
//! - [`Repository`]: generic `find` / `add` over an entity keyed by `Key`
//! - [`Keyed`]: exposes the persisted key of an entity
//! - [`InMemoryRepository`]: default concurrent in-memory backend
//! - `PgStreetAddressRepository`: PostgreSQL backend (`database` feature)

mod error;
mod memory;
#[cfg(feature = "database")]
mod postgres;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::InMemoryRepository;
#[cfg(feature = "database")]
pub use postgres::PgStreetAddressRepository;
pub use traits::{Keyed, Repository, RepositoryResult};
