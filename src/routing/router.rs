//! Rule lookup and upstream URL construction.
//!
//! # Responsibilities
//! - Store compiled forwarding rules
//! - Look up the matching rule for a request path
//! - Build the upstream URL for a match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) prefix scan (rule tables are tiny)
//! - Explicit `None` rather than silent default
//! - Paths with `.` or `..` segments are refused, never resolved

use axum::http::Uri;
use url::Url;

use crate::config::ProxyRule;
use crate::routing::matcher::PathPrefixMatcher;

/// Request paths the router refuses to forward.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("path contains a dot segment: {0}")]
    DotSegment(String),
}

/// A rule compiled for fast matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    matcher: PathPrefixMatcher,
    rule: ProxyRule,
}

impl CompiledRule {
    pub fn new(rule: ProxyRule) -> Self {
        Self {
            matcher: PathPrefixMatcher::new(rule.path_prefix.clone()),
            rule,
        }
    }

    pub fn rule(&self) -> &ProxyRule {
        &self.rule
    }

    pub fn prefix(&self) -> &str {
        self.matcher.prefix()
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// The rule that matched.
    pub rule: &'a ProxyRule,
    /// Fully-qualified upstream URL, query string included.
    pub upstream: Url,
}

impl RouteMatch<'_> {
    /// Path and query as sent upstream (e.g. `/anything?x=1`).
    pub fn destination_path(&self) -> String {
        match self.upstream.query() {
            Some(query) => format!("{}?{}", self.upstream.path(), query),
            None => self.upstream.path().to_string(),
        }
    }
}

/// Immutable rule table. First rule in declaration order wins.
#[derive(Debug, Clone)]
pub struct Router {
    rules: Vec<CompiledRule>,
}

impl Router {
    /// Compile a router from configuration.
    pub fn from_config(rules: Vec<ProxyRule>) -> Self {
        Self {
            rules: rules.into_iter().map(CompiledRule::new).collect(),
        }
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Find the rule for `uri` and compute where it should be forwarded.
    ///
    /// `Url` resolves dot segments (percent-encoded ones too), which would
    /// let `/api/%2e%2e/x` escape the rule's scope, so such paths are an error.
    pub fn match_uri(&self, uri: &Uri) -> Result<Option<RouteMatch<'_>>, RouteError> {
        let path = uri.path();
        if has_dot_segment(path) {
            return Err(RouteError::DotSegment(path.to_string()));
        }

        Ok(self.rules.iter().find_map(|compiled| {
            let rest = compiled.matcher.strip(path)?;
            let forwarded_path = if compiled.rule.strip_prefix { rest } else { path };

            let mut upstream = compiled.rule.target.clone();
            upstream.set_path(forwarded_path);
            upstream.set_query(uri.query());

            Some(RouteMatch {
                rule: &compiled.rule,
                upstream,
            })
        }))
    }
}

/// True if any segment of `path` is `.` or `..`, literal or percent-encoded.
fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|segment| {
        let decoded = segment.replace("%2e", ".").replace("%2E", ".");
        decoded == "." || decoded == ".."
    })
}
