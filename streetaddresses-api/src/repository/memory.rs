//! In-memory StreetAddress repository
//!
//! Default backend when no database is configured. Keys are assigned from an
//! atomic sequence starting at 1 (or after the highest seeded key).

use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::DashMap;

use super::error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
use super::traits::{Repository, RepositoryResult};
use crate::models::StreetAddress;

/// Concurrent in-memory store of street addresses
#[derive(Debug)]
pub struct InMemoryRepository {
    entries: DashMap<i32, StreetAddress>,
    last_key: AtomicI32,
}

impl InMemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            last_key: AtomicI32::new(0),
        }
    }

    /// Create a repository preloaded with `seed`
    ///
    /// Seeded addresses with a key `>= 1` keep it; others are assigned the
    /// next free key.
    pub fn with_seed(seed: impl IntoIterator<Item = StreetAddress>) -> Self {
        let (keyed, unkeyed): (Vec<_>, Vec<_>) =
            seed.into_iter().partition(StreetAddress::is_persisted);

        let highest = keyed.iter().map(|a| a.id).max().unwrap_or(0);
        let repo = Self {
            entries: keyed.into_iter().map(|a| (a.id, a)).collect(),
            last_key: AtomicI32::new(highest),
        };

        for address in unkeyed {
            if let Ok(key) = repo.next_key() {
                repo.entries.insert(key, address.with_id(key));
            }
        }

        tracing::debug!(count = repo.len(), "Seeded in-memory repository");
        repo
    }

    /// Number of stored addresses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the repository holds no addresses
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_key(&self) -> RepositoryResult<i32> {
        self.last_key
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |k| k.checked_add(1))
            .map(|previous| previous + 1)
            .map_err(|_| {
                RepositoryError::new(
                    RepositoryOperation::Add,
                    RepositoryErrorKind::KeyExhausted,
                    "No StreetAddress keys left",
                )
            })
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository<StreetAddress, i32> for InMemoryRepository {
    async fn find(&self, key: i32) -> RepositoryResult<Option<StreetAddress>> {
        Ok(self.entries.get(&key).map(|entry| entry.value().clone()))
    }

    async fn add(&self, entity: StreetAddress) -> RepositoryResult<StreetAddress> {
        let key = self.next_key()?;
        let saved = entity.with_id(key);
        self.entries.insert(key, saved.clone());
        Ok(saved)
    }
}
