//! Health check handlers
//!
//! - `GET /health`: liveness, always 200 while the process serves requests
//! - `GET /ready`: readiness, 503 when the repository cannot serve requests

use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::StreetAddress;
use crate::repository::Repository;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// State shared by the health routes
#[derive(Debug)]
pub struct HealthState<R> {
    service: String,
    repository: Arc<R>,
}

impl<R> Clone for HealthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            repository: self.repository.clone(),
        }
    }
}

impl<R> HealthState<R> {
    /// Create health state for `service` backed by `repository`
    pub fn new(service: impl Into<String>, repository: Arc<R>) -> Self {
        Self {
            service: service.into(),
            repository,
        }
    }
}

/// Build the `/health` and `/ready` routes
pub fn router<R>(state: HealthState<R>) -> Router
where
    R: Repository<StreetAddress, i32> + 'static,
{
    Router::new()
        .route("/health", get(health::<R>))
        .route("/ready", get(readiness::<R>))
        .with_state(state)
}

/// Simple health check (liveness probe)
pub async fn health<R>(State(state): State<HealthState<R>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.service.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check against the repository (readiness probe)
pub async fn readiness<R>(State(state): State<HealthState<R>>) -> impl IntoResponse
where
    R: Repository<StreetAddress, i32>,
{
    let repository = match state.repository.ready().await {
        Ok(()) => DependencyStatus {
            healthy: true,
            message: None,
        },
        Err(e) => {
            tracing::error!("Repository readiness check failed: {}", e);
            DependencyStatus {
                healthy: false,
                message: Some(format!("{} {}", e.operation, e.kind)),
            }
        }
    };

    let ready = repository.healthy;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let mut dependencies = HashMap::new();
    dependencies.insert("repository".to_string(), repository);

    let response = ReadinessResponse {
        ready,
        service: state.service.clone(),
        dependencies,
    };

    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::testing::RecordingRepository;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(HealthState::new("addresses", Arc::new(RecordingRepository::default())));
        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "addresses");
    }

    #[tokio::test]
    async fn test_ready() {
        let app = router(HealthState::new("addresses", Arc::new(RecordingRepository::default())));
        let (status, body) = get_json(app, "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ready"], true);
        assert_eq!(body["dependencies"]["repository"]["healthy"], true);
    }

    #[tokio::test]
    async fn test_not_ready_when_repository_down() {
        let app = router(HealthState::new("addresses", Arc::new(RecordingRepository::not_ready())));
        let (status, body) = get_json(app, "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["ready"], false);
        assert_eq!(
            body["dependencies"]["repository"]["message"],
            "ready connection_failed"
        );
    }
}
