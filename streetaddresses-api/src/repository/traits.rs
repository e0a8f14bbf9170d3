//! Repository trait definitions
//!
//! Uses RPITIT (Return Position Impl Trait In Traits) for async methods
//! without `async_trait`. Handlers depend only on these traits, never on a
//! concrete storage mechanism.

use std::future::Future;

use super::error::RepositoryError;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Capability to expose the persisted key of an entity
pub trait Keyed<Key> {
    /// The key assigned by the repository
    fn key(&self) -> Key;
}

/// Generic repository over an entity type keyed by `Key`
///
/// # Type Parameters
///
/// - `Entity`: the stored entity type
/// - `Key`: the primary key type (e.g., `i32`)
///
/// # Example
///
/// ```rust,ignore
/// use streetaddresses_api::repository::{Repository, RepositoryResult};
///
/// impl Repository<StreetAddress, i32> for MyRepository {
///     async fn find(&self, key: i32) -> RepositoryResult<Option<StreetAddress>> {
///         todo!()
///     }
///
///     async fn add(&self, entity: StreetAddress) -> RepositoryResult<StreetAddress> {
///         todo!()
///     }
/// }
/// ```
pub trait Repository<Entity, Key>: Send + Sync {
    /// Find an entity by its key
    ///
    /// Returns `Ok(Some(entity))` if found, `Ok(None)` if not found.
    fn find(&self, key: Key) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;

    /// Persist a new entity
    ///
    /// Returns the stored entity including its assigned key.
    fn add(&self, entity: Entity) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// Check that the backing store can serve requests
    ///
    /// Stores without external dependencies are always ready.
    fn ready(&self) -> impl Future<Output = RepositoryResult<()>> + Send {
        async { Ok(()) }
    }
}
