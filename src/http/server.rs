//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the proxy handler
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind server to listener
//! - Dispatch requests to the rule table
//! - Forward matched requests to the remote origin
//! - Fire proxy hooks on dispatch, response and failure

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use http_body_util::LengthLimitError;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::PortalConfig;
use crate::http::request::{self, MakeRequestUuid};
use crate::http::response;
use crate::observability::{
    LoggingHooks, ProxyErrorEvent, ProxyHooks, ProxyRequestEvent, ProxyResponseEvent,
};
use crate::routing::Router as ProxyRouter;

/// Errors raised while building or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upstream clients, one per TLS verification mode.
#[derive(Clone)]
pub struct UpstreamClients {
    verified: reqwest::Client,
    unverified: reqwest::Client,
}

impl UpstreamClients {
    pub fn new(connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            verified: Self::builder(connect_timeout).build()?,
            unverified: Self::builder(connect_timeout)
                .danger_accept_invalid_certs(true)
                .build()?,
        })
    }

    // Redirects are handed back to the caller untouched.
    fn builder(connect_timeout: Duration) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
    }

    pub fn for_rule(&self, secure: bool) -> &reqwest::Client {
        if secure {
            &self.verified
        } else {
            &self.unverified
        }
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ProxyRouter>,
    pub clients: UpstreamClients,
    pub hooks: Arc<dyn ProxyHooks>,
    pub max_body_size: usize,
}

/// Dev server hosting the forwarding rules.
pub struct HttpServer {
    config: PortalConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server that logs proxy events.
    pub fn new(config: PortalConfig) -> Result<Self, ServerError> {
        Self::with_hooks(config, Arc::new(LoggingHooks))
    }

    /// Create a new HTTP server with a custom hook listener.
    pub fn with_hooks(config: PortalConfig, hooks: Arc<dyn ProxyHooks>) -> Result<Self, ServerError> {
        let router = Arc::new(ProxyRouter::from_config(config.rules.clone()));
        let clients = UpstreamClients::new(Duration::from_secs(config.timeouts.connect_secs))?;

        for compiled in router.rules() {
            tracing::info!(
                prefix = %compiled.prefix(),
                upstream = %compiled.rule().target,
                change_origin = compiled.rule().change_origin,
                secure = compiled.rule().secure,
                "Proxy rule registered"
            );
        }

        let state = AppState {
            router,
            clients,
            hooks,
            max_body_size: config.limits.max_body_size,
        };

        Ok(Self { config, state })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(self.state.clone())
            .layer(RequestBodyLimitLayer::new(self.config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(self.config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.build_router();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main proxy handler.
/// Looks up the rule and forwards the request verbatim.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request::request_id(request.headers());
    let original_path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    // 1. Match rule
    let route = match state.router.match_uri(request.uri()) {
        Ok(Some(route)) => route,
        Ok(None) => {
            tracing::warn!(request_id = %request_id, path = %original_path, "No route matched");
            return response::no_route();
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Refusing request path");
            return response::bad_request("Invalid request path");
        }
    };

    // 2. Buffer request body
    let (parts, body) = request.into_parts();
    let body = match axum::body::to_bytes(body, state.max_body_size).await {
        Ok(bytes) => bytes,
        Err(e) if exceeds_body_limit(&e) => {
            tracing::warn!(request_id = %request_id, limit = state.max_body_size, "Request body too large");
            return response::payload_too_large();
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Failed to read request body");
            return response::bad_request("Failed to read request body");
        }
    };

    let headers = request::forwarded_headers(&parts.headers, route.rule.change_origin);
    let upstream_url = route.upstream.to_string();
    let destination_path = route.destination_path();

    state.hooks.on_request(&ProxyRequestEvent {
        request_id: &request_id,
        method: &parts.method,
        destination_path: &destination_path,
        upstream_url: &upstream_url,
    });

    // 3. Forward
    let client = state.clients.for_rule(route.rule.secure);
    let outbound = request::build_upstream_request(
        client,
        parts.method.clone(),
        route.upstream.clone(),
        headers,
        body,
    );

    match outbound.send().await {
        Ok(upstream) => {
            state.hooks.on_response(&ProxyResponseEvent {
                request_id: &request_id,
                status: upstream.status(),
                original_path: &original_path,
            });
            response::from_upstream(upstream)
        }
        Err(e) => {
            let detail = e.to_string();
            state.hooks.on_error(&ProxyErrorEvent {
                request_id: &request_id,
                original_path: &original_path,
                upstream_url: &upstream_url,
                detail: &detail,
            });
            response::bad_gateway()
        }
    }
}

/// True if the body error was caused by the size limit, at any depth of the
/// error chain (the limit layer and `to_bytes` each wrap the body).
fn exceeds_body_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let mut config = PortalConfig::default();
        config.limits.max_body_size = 16;
        HttpServer::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_unmatched_path_is_404() {
        let app = server().build_router();
        let response = app
            .oneshot(Request::builder().uri("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected_before_forwarding() {
        let app = server().build_router();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .body(Body::from(vec![b'x'; 64]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_broken_body_is_bad_request() {
        let app = server().build_router();
        let chunks: Vec<Result<&'static [u8], std::io::Error>> = vec![
            Ok(b"partial"),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "client went away")),
        ];
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .body(Body::from_stream(futures_util::stream::iter(chunks)))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dot_segment_path_is_bad_request() {
        let app = server().build_router();
        let response = app
            .oneshot(Request::builder().uri("/api/%2e%2e/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_client_selection_follows_rule() {
        let clients = UpstreamClients::new(Duration::from_secs(1)).unwrap();
        assert!(!std::ptr::eq(clients.for_rule(true), clients.for_rule(false)));
    }
}
