use std::sync::Arc;

use streetaddresses_api::observability::shutdown_tracing;
use streetaddresses_api::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    #[cfg(feature = "database")]
    if let Some(db) = config.database.clone() {
        let pool = create_pool(&db).await?;
        let repository = PgStreetAddressRepository::new(pool);
        if db.create_schema {
            repository.ensure_schema().await?;
        }
        return run(config, Arc::new(repository)).await;
    }

    let repository = InMemoryRepository::with_seed(config.storage.seed.clone());
    tracing::info!(seeded = repository.len(), "Using in-memory repository");

    run(config, Arc::new(repository)).await
}

async fn run<R>(config: Config, repository: Arc<R>) -> Result<()>
where
    R: Repository<StreetAddress, i32> + 'static,
{
    let handler = StreetAddressHandler::builder()
        .logger(tracing::info_span!("street_addresses"))
        .repository(repository)
        .build()?;

    let app = app(&config, Arc::new(handler));

    let result = Server::new(config).serve(app).await;
    shutdown_tracing();
    result
}
