//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Router,
};
use login_portal::config::{PortalConfig, ProxyRule};
use login_portal::http::HttpServer;
use login_portal::lifecycle::Shutdown;
use login_portal::observability::{
    ProxyErrorEvent, ProxyHooks, ProxyRequestEvent, ProxyResponseEvent,
};
use tokio::net::TcpListener;

/// What the mock upstream saw.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub host: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub type Captures = Arc<Mutex<Vec<Captured>>>;

/// Start a mock upstream on an ephemeral port.
///
/// Paths of the form `/status/<code>` answer with that code; everything else
/// answers 200. The body is always `upstream:<path>`.
pub async fn start_mock_upstream() -> (SocketAddr, Captures) {
    let captures: Captures = Arc::default();
    let app = Router::new()
        .route("/", any(record))
        .route("/{*path}", any(record))
        .with_state(captures.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, captures)
}

async fn record(
    State(captures): State<Captures>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, HeaderMap, String) {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();

    captures.lock().unwrap().push(Captured {
        method,
        path: path.clone(),
        host: headers
            .get("host")
            .and_then(|h| h.to_str().ok())
            .map(str::to_string),
        headers: headers.clone(),
        body,
    });

    let status = uri
        .path()
        .strip_prefix("/status/")
        .and_then(|code| code.parse::<u16>().ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);

    let mut response_headers = HeaderMap::new();
    response_headers.insert("x-upstream", "mock".parse().unwrap());

    (status, response_headers, format!("upstream:{}", path))
}

/// A loopback address nothing listens on.
pub async fn dead_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Every hook call, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    Request { method: String, destination: String },
    Response { status: u16, original_path: String },
    Error { original_path: String, detail: String },
}

#[derive(Default)]
pub struct RecordingHooks {
    pub events: Mutex<Vec<HookEvent>>,
}

impl RecordingHooks {
    pub fn events(&self) -> Vec<HookEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProxyHooks for RecordingHooks {
    fn on_request(&self, event: &ProxyRequestEvent<'_>) {
        self.events.lock().unwrap().push(HookEvent::Request {
            method: event.method.to_string(),
            destination: event.destination_path.to_string(),
        });
    }

    fn on_response(&self, event: &ProxyResponseEvent<'_>) {
        self.events.lock().unwrap().push(HookEvent::Response {
            status: event.status.as_u16(),
            original_path: event.original_path.to_string(),
        });
    }

    fn on_error(&self, event: &ProxyErrorEvent<'_>) {
        self.events.lock().unwrap().push(HookEvent::Error {
            original_path: event.original_path.to_string(),
            detail: event.detail.to_string(),
        });
    }
}

/// A `/api` rule pointing at `upstream` over plain HTTP.
pub fn api_rule(upstream: SocketAddr) -> ProxyRule {
    ProxyRule {
        path_prefix: "/api".into(),
        target: format!("http://{}", upstream).parse().unwrap(),
        change_origin: true,
        secure: true,
        strip_prefix: true,
    }
}

/// Run the dev server with the given rules on an ephemeral port.
pub async fn start_proxy(
    rules: Vec<ProxyRule>,
    hooks: Arc<RecordingHooks>,
) -> (SocketAddr, Shutdown) {
    let mut config = PortalConfig::default();
    config.server.bind_address = "127.0.0.1:0".into();
    config.rules = rules;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_hooks(config, hooks).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
