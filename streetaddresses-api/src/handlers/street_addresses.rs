//! StreetAddress resource handler
//!
//! Validates identifiers, delegates to the injected repository and maps the
//! outcome to a response. Holds no mutable state, so one instance is shared
//! across all in-flight requests.

use std::sync::Arc;

use tracing::{Instrument, Span};

use crate::error::{Error, Result};
use crate::models::StreetAddress;
use crate::repository::{Keyed, Repository};
use crate::responses::{Created, NoContent};

/// Path of the StreetAddress collection
pub const COLLECTION_PATH: &str = "/api/streetaddresses";

/// Route template of a single StreetAddress
pub const ITEM_PATH: &str = "/api/streetaddresses/{id}";

/// Location of the resource served by [`StreetAddressHandler::retrieve`] for `id`
pub fn location_for(id: i32) -> String {
    format!("{}/{}", COLLECTION_PATH, id)
}

/// Request handler for StreetAddress resources
///
/// Built with [`StreetAddressHandler::builder`], which fails if either the
/// logger span or the repository is missing.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use streetaddresses_api::handlers::StreetAddressHandler;
/// use streetaddresses_api::repository::InMemoryRepository;
///
/// let handler = StreetAddressHandler::builder()
///     .logger(tracing::info_span!("street_addresses"))
///     .repository(Arc::new(InMemoryRepository::new()))
///     .build()
///     .unwrap();
/// # let _ = handler;
/// ```
#[derive(Debug)]
pub struct StreetAddressHandler<R> {
    logger: Span,
    repository: Arc<R>,
}

impl<R> StreetAddressHandler<R>
where
    R: Repository<StreetAddress, i32>,
{
    /// Start building a handler
    pub fn builder() -> StreetAddressHandlerBuilder<R> {
        StreetAddressHandlerBuilder::default()
    }

    /// The repository this handler delegates to
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Fetch the address stored under `id`
    ///
    /// Identifiers below 1 are reported as not found without touching the
    /// repository. Repository faults are returned untranslated.
    pub async fn retrieve(&self, id: i32) -> Result<StreetAddress> {
        self.find_valid(id).instrument(self.logger.clone()).await
    }

    /// Existence probe for `id`
    ///
    /// Always answers with an empty response and never consults the
    /// repository. Whether this should become a real existence check is
    /// still an open product decision.
    pub fn probe(&self, id: i32) -> NoContent {
        self.logger.in_scope(|| tracing::trace!(id, "StreetAddress probe"));
        NoContent
    }

    /// Persist `resource` and report where it can be retrieved
    pub async fn create(&self, resource: StreetAddress) -> Result<Created<StreetAddress>> {
        self.save(resource).instrument(self.logger.clone()).await
    }

    async fn find_valid(&self, id: i32) -> Result<StreetAddress> {
        if id < 1 {
            tracing::debug!(id, "Rejected invalid StreetAddress id");
            return Err(not_found(id));
        }

        let resource = self.repository.find(id).await?;
        tracing::debug!(id, found = resource.is_some(), "StreetAddress lookup");
        resource.ok_or_else(|| not_found(id))
    }

    async fn save(&self, resource: StreetAddress) -> Result<Created<StreetAddress>> {
        let saved = self.repository.add(resource).await?;
        let key = saved.key();
        tracing::info!(id = key, "StreetAddress created");
        Ok(Created::new(saved).with_location(location_for(key)))
    }
}

fn not_found(id: i32) -> Error {
    Error::NotFound(format!("StreetAddress {} not found", id))
}

/// Builder for [`StreetAddressHandler`]
#[derive(Debug)]
pub struct StreetAddressHandlerBuilder<R> {
    logger: Option<Span>,
    repository: Option<Arc<R>>,
}

impl<R> Default for StreetAddressHandlerBuilder<R> {
    fn default() -> Self {
        Self {
            logger: None,
            repository: None,
        }
    }
}

impl<R> StreetAddressHandlerBuilder<R>
where
    R: Repository<StreetAddress, i32>,
{
    /// Span under which the handler records its events
    #[must_use]
    pub fn logger(mut self, logger: Span) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Repository the handler delegates persistence to
    #[must_use]
    pub fn repository(mut self, repository: Arc<R>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the handler
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCollaborator`] naming the first absent collaborator.
    pub fn build(self) -> Result<StreetAddressHandler<R>> {
        let logger = self.logger.ok_or(Error::MissingCollaborator("logger"))?;
        let repository = self
            .repository
            .ok_or(Error::MissingCollaborator("repository"))?;

        Ok(StreetAddressHandler { logger, repository })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRepository;

    fn handler(repo: &Arc<RecordingRepository>) -> StreetAddressHandler<RecordingRepository> {
        StreetAddressHandler::builder()
            .logger(tracing::info_span!("street_addresses"))
            .repository(repo.clone())
            .build()
            .unwrap()
    }

    fn seeded() -> Arc<RecordingRepository> {
        Arc::new(RecordingRepository::seeded(vec![StreetAddress::new()
            .with_id(5)
            .with_street("1 Main St")]))
    }

    #[tokio::test]
    async fn test_retrieve_invalid_id_skips_repository() {
        let repo = seeded();
        let handler = handler(&repo);

        for id in [0, -1, -42, i32::MIN] {
            let result = handler.retrieve(id).await;
            assert!(matches!(result, Err(Error::NotFound(_))), "id {id}");
        }
        assert_eq!(repo.find_calls(), 0);
    }

    #[tokio::test]
    async fn test_retrieve_missing_queries_once() {
        let repo = seeded();
        let handler = handler(&repo);

        let result = handler.retrieve(6).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(repo.find_calls(), 1);
        assert_eq!(repo.found_keys(), vec![6]);
    }

    #[tokio::test]
    async fn test_retrieve_existing() {
        let repo = seeded();
        let handler = handler(&repo);

        let address = handler.retrieve(5).await.unwrap();
        assert_eq!(address, StreetAddress::new().with_id(5).with_street("1 Main St"));
    }

    #[tokio::test]
    async fn test_retrieve_propagates_repository_fault() {
        let repo = Arc::new(RecordingRepository::failing());
        let handler = handler(&repo);

        let result = handler.retrieve(1).await;
        assert!(matches!(result, Err(Error::Repository(_))));
        assert_eq!(repo.find_calls(), 1);
    }

    // Probe is a stub: empty result, no lookup. Revisit once its intended
    // behavior is confirmed.
    #[tokio::test]
    async fn test_probe_is_empty_and_skips_repository() {
        let repo = seeded();
        let handler = handler(&repo);

        for id in [5, 6, 0, -1] {
            assert_eq!(handler.probe(id), NoContent);
        }
        assert_eq!(repo.find_calls(), 0);
        assert_eq!(repo.add_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_returns_saved_entity_and_location() {
        let repo = seeded();
        let handler = handler(&repo);

        let created = handler
            .create(StreetAddress::new().with_street("2 Oak Ave"))
            .await
            .unwrap();

        assert_eq!(repo.add_calls(), 1);
        assert_eq!(created.data(), &StreetAddress::new().with_id(6).with_street("2 Oak Ave"));
        assert_eq!(created.location(), Some("/api/streetaddresses/6"));

        let fetched = handler.retrieve(created.data().key()).await.unwrap();
        assert_eq!(&fetched, created.data());
    }

    #[tokio::test]
    async fn test_create_propagates_repository_fault() {
        let repo = Arc::new(RecordingRepository::failing());
        let handler = handler(&repo);

        let result = handler.create(StreetAddress::new()).await;
        assert!(matches!(result, Err(Error::Repository(_))));
        assert_eq!(repo.add_calls(), 1);
    }

    #[test]
    fn test_build_without_logger_fails() {
        let result = StreetAddressHandler::builder()
            .repository(Arc::new(RecordingRepository::default()))
            .build();
        assert!(matches!(result, Err(Error::MissingCollaborator("logger"))));
    }

    #[test]
    fn test_build_without_repository_fails() {
        let result = StreetAddressHandler::<RecordingRepository>::builder()
            .logger(tracing::info_span!("street_addresses"))
            .build();
        assert!(matches!(result, Err(Error::MissingCollaborator("repository"))));
    }

    #[test]
    fn test_location_for() {
        assert_eq!(location_for(6), "/api/streetaddresses/6");
    }
}
