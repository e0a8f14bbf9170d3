//! Request tracking middleware
//!
//! Request ID generation and propagation plus sensitive header masking.

use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
};

use crate::ids::MakeTypedRequestId;

/// Sensitive headers that should be masked in logs
pub const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "set-cookie", "x-api-key"];

/// Set `x-request-id` on incoming requests that lack one
pub fn request_id_layer() -> SetRequestIdLayer<MakeTypedRequestId> {
    SetRequestIdLayer::x_request_id(MakeTypedRequestId)
}

/// Copy `x-request-id` from the request onto the response
pub fn request_id_propagation_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Mark [`SENSITIVE_HEADERS`] so trace output redacts them
pub fn sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    let headers = SENSITIVE_HEADERS
        .iter()
        .map(|h| http::HeaderName::from_static(*h))
        .collect::<Vec<_>>();

    SetSensitiveRequestHeadersLayer::new(headers)
}
