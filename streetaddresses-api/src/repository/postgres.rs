//! PostgreSQL StreetAddress repository

use sqlx::PgPool;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{Repository, RepositoryResult};
use crate::models::StreetAddress;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS street_addresses (
    id          SERIAL PRIMARY KEY,
    street      TEXT,
    city        TEXT,
    region      TEXT,
    postal_code TEXT
)
"#;

const FIND_BY_ID: &str = r#"
SELECT id, street, city, region, postal_code
FROM street_addresses
WHERE id = $1
"#;

const INSERT: &str = r#"
INSERT INTO street_addresses (street, city, region, postal_code)
VALUES ($1, $2, $3, $4)
RETURNING id, street, city, region, postal_code
"#;

/// Street addresses stored in the `street_addresses` table
#[derive(Debug, Clone)]
pub struct PgStreetAddressRepository {
    pool: PgPool,
}

impl PgStreetAddressRepository {
    /// Wrap an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `street_addresses` table if it does not exist
    pub async fn ensure_schema(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::Ready, e))?;
        tracing::info!("street_addresses schema ensured");
        Ok(())
    }
}

impl Repository<StreetAddress, i32> for PgStreetAddressRepository {
    async fn find(&self, key: i32) -> RepositoryResult<Option<StreetAddress>> {
        sqlx::query_as::<_, StreetAddress>(FIND_BY_ID)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::from_sqlx(RepositoryOperation::Find, e)
                    .with_entity("StreetAddress", key.to_string())
            })
    }

    async fn add(&self, entity: StreetAddress) -> RepositoryResult<StreetAddress> {
        sqlx::query_as::<_, StreetAddress>(INSERT)
            .bind(entity.street)
            .bind(entity.city)
            .bind(entity.region)
            .bind(entity.postal_code)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::Add, e))
    }

    async fn ready(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::Ready, e))
    }
}
