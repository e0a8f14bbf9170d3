//! Success response types
//!
//! - **201 Created** - resource created, with a `Location` header
//! - **204 No Content** - success without a response body

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// HTTP 201 Created response
///
/// Carries the created resource as the JSON body and, optionally, a
/// `Location` header pointing at where it can be retrieved.
///
/// ```rust
/// use streetaddresses_api::responses::Created;
///
/// let created = Created::new("body").with_location("/api/streetaddresses/6");
/// assert_eq!(created.location(), Some("/api/streetaddresses/6"));
/// ```
#[derive(Debug)]
pub struct Created<T> {
    data: T,
    location: Option<String>,
}

impl<T> Created<T> {
    /// Create a new 201 Created response
    pub fn new(data: T) -> Self {
        Self {
            data,
            location: None,
        }
    }

    /// Add a Location header pointing to the created resource
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The created resource
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The location of the created resource, if set
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Consume the response, returning the created resource
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::CREATED, Json(&self.data)).into_response();

        if let Some(location) = self.location {
            if let Ok(header_value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(header::LOCATION, header_value);
            }
        }

        response
    }
}

/// HTTP 204 No Content response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
