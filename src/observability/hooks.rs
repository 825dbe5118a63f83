//! Proxy lifecycle hooks.
//!
//! # Responsibilities
//! - Define the listener interface fired on dispatch, response and failure
//! - Provide the default listener that emits one diagnostic record per event
//!
//! # Design Decisions
//! - Hooks observe only; they receive borrowed event data and return nothing
//! - Forwarding never branches on a hook
//! - Listeners are shared across requests, so they must be `Send + Sync`

use axum::http::{Method, StatusCode};

/// Fired just before a request is dispatched upstream.
#[derive(Debug, Clone)]
pub struct ProxyRequestEvent<'a> {
    pub request_id: &'a str,
    pub method: &'a Method,
    /// Upstream path and query (after prefix rewriting).
    pub destination_path: &'a str,
    /// Full upstream URL.
    pub upstream_url: &'a str,
}

/// Fired when upstream response headers arrive.
#[derive(Debug, Clone)]
pub struct ProxyResponseEvent<'a> {
    pub request_id: &'a str,
    pub status: StatusCode,
    /// Path and query of the original client request.
    pub original_path: &'a str,
}

/// Fired on a connection-level failure talking to the upstream.
#[derive(Debug, Clone)]
pub struct ProxyErrorEvent<'a> {
    pub request_id: &'a str,
    pub original_path: &'a str,
    pub upstream_url: &'a str,
    pub detail: &'a str,
}

/// Listener for proxy lifecycle events.
pub trait ProxyHooks: Send + Sync {
    fn on_request(&self, event: &ProxyRequestEvent<'_>);

    fn on_response(&self, event: &ProxyResponseEvent<'_>);

    fn on_error(&self, event: &ProxyErrorEvent<'_>);
}

/// Default listener: a structured log line per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHooks;

impl ProxyHooks for LoggingHooks {
    fn on_request(&self, event: &ProxyRequestEvent<'_>) {
        tracing::info!(
            request_id = %event.request_id,
            method = %event.method,
            destination = %event.destination_path,
            upstream = %event.upstream_url,
            "Sending request to"
        );
    }

    fn on_response(&self, event: &ProxyResponseEvent<'_>) {
        tracing::info!(
            request_id = %event.request_id,
            status = event.status.as_u16(),
            path = %event.original_path,
            "Received response from"
        );
    }

    fn on_error(&self, event: &ProxyErrorEvent<'_>) {
        tracing::error!(
            request_id = %event.request_id,
            path = %event.original_path,
            upstream = %event.upstream_url,
            error = %event.detail,
            "Proxy error"
        );
    }
}
