//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → router.rs (rule lookup)
//!     → matcher.rs (segment-aware prefix check)
//!     → Return: RouteMatch with upstream URL, None, or RouteError for dot segments
//!
//! Rule Compilation (at startup):
//!     ProxyRule[]
//!     → Compile prefix matchers
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same rule
//! - First match wins (declaration order)

pub mod matcher;
pub mod router;

pub use router::{CompiledRule, RouteError, RouteMatch, Router};
