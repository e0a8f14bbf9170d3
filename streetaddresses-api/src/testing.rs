//! Repository doubles shared by unit tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::StreetAddress;
use crate::repository::{
    InMemoryRepository, Repository, RepositoryError, RepositoryOperation, RepositoryResult,
};

/// Wraps an [`InMemoryRepository`] and records every call made to it
#[derive(Debug, Default)]
pub(crate) struct RecordingRepository {
    inner: InMemoryRepository,
    find_calls: AtomicUsize,
    add_calls: AtomicUsize,
    found_keys: Mutex<Vec<i32>>,
    failing: AtomicBool,
    not_ready: AtomicBool,
}

impl RecordingRepository {
    pub(crate) fn seeded(seed: Vec<StreetAddress>) -> Self {
        Self {
            inner: InMemoryRepository::with_seed(seed),
            ..Self::default()
        }
    }

    /// Every subsequent find/add fails with a connection error
    pub(crate) fn failing() -> Self {
        let repo = Self::default();
        repo.failing.store(true, Ordering::SeqCst);
        repo
    }

    pub(crate) fn not_ready() -> Self {
        let repo = Self::default();
        repo.not_ready.store(true, Ordering::SeqCst);
        repo
    }

    pub(crate) fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn found_keys(&self) -> Vec<i32> {
        self.found_keys.lock().unwrap().clone()
    }
}

impl Repository<StreetAddress, i32> for RecordingRepository {
    async fn find(&self, key: i32) -> RepositoryResult<Option<StreetAddress>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.found_keys.lock().unwrap().push(key);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::connection_failed(
                RepositoryOperation::Find,
                "connection refused",
            ));
        }
        self.inner.find(key).await
    }

    async fn add(&self, entity: StreetAddress) -> RepositoryResult<StreetAddress> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::connection_failed(
                RepositoryOperation::Add,
                "connection refused",
            ));
        }
        self.inner.add(entity).await
    }

    async fn ready(&self) -> RepositoryResult<()> {
        if self.not_ready.load(Ordering::SeqCst) {
            return Err(RepositoryError::connection_failed(
                RepositoryOperation::Ready,
                "connection refused",
            ));
        }
        Ok(())
    }
}
