//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Strip hop-by-hop headers before forwarding
//! - Prepare the outbound request for the upstream origin
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Method, end-to-end headers and body are forwarded verbatim
//! - Host is dropped when the rule rewrites the origin, so the client
//!   derives it from the upstream URL

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, Request};
use axum::body::Bytes;
use tower_http::request_id::{MakeRequestId, RequestId};
use url::Url;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Headers meaningful only for a single transport hop.
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Generates UUID v4 request IDs for `SetRequestIdLayer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Read the request ID assigned by the request-id layer.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Returns true for headers that must not cross the proxy.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name)
}

/// Copy end-to-end headers for the upstream request.
pub fn forwarded_headers(incoming: &HeaderMap, change_origin: bool) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(incoming.len());
    for (name, value) in incoming {
        if is_hop_by_hop(name) || *name == header::CONTENT_LENGTH {
            continue;
        }
        if change_origin && *name == header::HOST {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// Build the outbound request for one forwarded call.
pub fn build_upstream_request(
    client: &reqwest::Client,
    method: Method,
    upstream: Url,
    headers: HeaderMap,
    body: Bytes,
) -> reqwest::RequestBuilder {
    let builder = client.request(method, upstream).headers(headers);
    if body.is_empty() {
        builder
    } else {
        builder.body(body)
    }
}
