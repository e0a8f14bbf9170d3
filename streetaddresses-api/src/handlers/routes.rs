//! Axum wiring for the StreetAddress resource
//!
//! - `GET  /api/streetaddresses/{id}` → 200 entity | 404
//! - `HEAD /api/streetaddresses/{id}` → 204
//! - `POST /api/streetaddresses`      → 201 entity + `Location`

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use super::street_addresses::{StreetAddressHandler, COLLECTION_PATH, ITEM_PATH};
use crate::error::Result;
use crate::models::StreetAddress;
use crate::repository::Repository;
use crate::responses::{Created, NoContent};

/// Build the StreetAddress router around `handler`
pub fn router<R>(handler: Arc<StreetAddressHandler<R>>) -> Router
where
    R: Repository<StreetAddress, i32> + 'static,
{
    Router::new()
        .route(
            ITEM_PATH,
            get(get_street_address::<R>).head(head_street_address::<R>),
        )
        .route(COLLECTION_PATH, post(post_street_address::<R>))
        .with_state(handler)
}

async fn get_street_address<R>(
    State(handler): State<Arc<StreetAddressHandler<R>>>,
    Path(id): Path<i32>,
) -> Result<Json<StreetAddress>>
where
    R: Repository<StreetAddress, i32>,
{
    handler.retrieve(id).await.map(Json)
}

async fn head_street_address<R>(
    State(handler): State<Arc<StreetAddressHandler<R>>>,
    Path(id): Path<i32>,
) -> NoContent
where
    R: Repository<StreetAddress, i32>,
{
    handler.probe(id)
}

async fn post_street_address<R>(
    State(handler): State<Arc<StreetAddressHandler<R>>>,
    Json(resource): Json<StreetAddress>,
) -> Result<Created<StreetAddress>>
where
    R: Repository<StreetAddress, i32>,
{
    handler.create(resource).await
}
