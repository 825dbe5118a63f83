//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http server produces:
//!     → hooks.rs (dispatch / response / failure events)
//!     → tower_http TraceLayer (request spans)
//!
//! Consumers:
//!     → logging.rs (tracing subscriber, stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through every proxy event
//! - Hooks are pluggable so tests can record events

pub mod hooks;
pub mod logging;

pub use hooks::{LoggingHooks, ProxyErrorEvent, ProxyHooks, ProxyRequestEvent, ProxyResponseEvent};
