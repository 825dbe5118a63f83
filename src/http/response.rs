//! Response handling and transformation.
//!
//! # Responsibilities
//! - Transform upstream response for the client
//! - Strip hop-by-hop headers
//! - Stream the body without buffering
//! - Map local failures to HTTP status codes
//!
//! # Design Decisions
//! - Upstream status codes pass through untouched, 4xx/5xx included
//! - Connection-level failures result in 502 Bad Gateway

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::http::request::is_hop_by_hop;

/// Convert an upstream response into the response sent to the client.
pub fn from_upstream(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    let hop_by_hop: Vec<_> = headers
        .keys()
        .filter(|name| is_hop_by_hop(name))
        .cloned()
        .collect();
    for name in hop_by_hop {
        headers.remove(name);
    }

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

/// No rule covers the requested path.
pub fn no_route() -> Response {
    (StatusCode::NOT_FOUND, "No matching route found").into_response()
}

/// The upstream could not be reached.
pub fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
}

/// The client body exceeded the configured limit.
pub fn payload_too_large() -> Response {
    (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response()
}

/// The request path or body cannot be forwarded as sent.
pub fn bad_request(reason: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, reason).into_response()
}
