//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Detect conflicting rules
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PortalConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::PortalConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("at least one proxy rule is required")]
    NoRules,

    #[error("path prefix '{0}' must start with '/'")]
    PrefixNotAbsolute(String),

    #[error("path prefix '{0}' is declared more than once")]
    DuplicatePrefix(String),

    #[error("target '{0}' must be an http or https origin")]
    TargetScheme(String),

    #[error("target '{0}' must not carry a path, query or fragment")]
    TargetNotOrigin(String),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("auth.base_url '{0}' must be an http or https URL")]
    AuthBaseUrl(String),

    #[error("auth.login_path '{0}' must start with '/'")]
    AuthLoginPath(String),
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &PortalConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.server.bind_address.clone()));
    }

    if config.rules.is_empty() {
        errors.push(ValidationError::NoRules);
    }

    let mut seen = HashSet::new();
    for rule in &config.rules {
        if !rule.path_prefix.starts_with('/') {
            errors.push(ValidationError::PrefixNotAbsolute(rule.path_prefix.clone()));
        }
        if !seen.insert(rule.path_prefix.trim_end_matches('/')) {
            errors.push(ValidationError::DuplicatePrefix(rule.path_prefix.clone()));
        }
        if !is_http(&rule.target) || rule.target.host_str().is_none() {
            errors.push(ValidationError::TargetScheme(rule.target.to_string()));
        } else if rule.target.path() != "/"
            || rule.target.query().is_some()
            || rule.target.fragment().is_some()
        {
            errors.push(ValidationError::TargetNotOrigin(rule.target.to_string()));
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }
    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    match Url::parse(&config.auth.base_url) {
        Ok(url) if is_http(&url) => {}
        _ => errors.push(ValidationError::AuthBaseUrl(config.auth.base_url.clone())),
    }
    if !config.auth.login_path.starts_with('/') {
        errors.push(ValidationError::AuthLoginPath(config.auth.login_path.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
