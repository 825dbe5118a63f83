//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the dev server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration for the login portal dev server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Listener configuration.
    pub server: ServerConfig,

    /// Forwarding rules, checked in order.
    #[serde(rename = "proxy")]
    pub rules: Vec<ProxyRule>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Where the login form sends credentials.
    pub auth: AuthConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            rules: vec![ProxyRule::default()],
            timeouts: TimeoutConfig::default(),
            limits: LimitsConfig::default(),
            observability: ObservabilityConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "[::]:8080").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "[::]:8080".to_string(),
        }
    }
}

/// A single prefix forwarding rule.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProxyRule {
    /// Path prefix to match (e.g., "/api").
    pub path_prefix: String,

    /// Remote origin requests are forwarded to.
    pub target: Url,

    /// Rewrite the Host header to the target's authority.
    #[serde(default = "default_true")]
    pub change_origin: bool,

    /// Verify the upstream TLS certificate.
    #[serde(default = "default_true")]
    pub secure: bool,

    /// Drop the matched prefix before forwarding.
    #[serde(default = "default_true")]
    pub strip_prefix: bool,
}

impl Default for ProxyRule {
    fn default() -> Self {
        Self {
            path_prefix: "/api".to_string(),
            target: Url::parse("https://padelvalles.com").expect("static URL is valid"),
            change_origin: true,
            secure: true,
            strip_prefix: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Timeout configuration for upstream traffic.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upstream connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Pretty output for development, JSON for machine parsing.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Authentication endpoint used by the login form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Base URL the form talks to (normally the dev server itself).
    pub base_url: String,

    /// Path of the login endpoint under `base_url`.
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            login_path: "/api/auth/login".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_single_api_rule() {
        let config = PortalConfig::default();
        assert_eq!(config.rules.len(), 1);

        let rule = &config.rules[0];
        assert_eq!(rule.path_prefix, "/api");
        assert_eq!(rule.target.as_str(), "https://padelvalles.com/");
        assert!(rule.change_origin);
        assert!(rule.secure);
    }

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let config: PortalConfig = toml::from_str(
            r#"
            [server]
            bind_address = "127.0.0.1:3000"

            [[proxy]]
            path_prefix = "/backend"
            target = "http://localhost:9000"
            secure = false
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].path_prefix, "/backend");
        assert!(!config.rules[0].secure);
        assert!(config.rules[0].change_origin);
        assert!(config.rules[0].strip_prefix);
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: PortalConfig = toml::from_str("").unwrap();
        assert_eq!(config.rules, PortalConfig::default().rules);
        assert_eq!(config.auth.login_path, "/api/auth/login");
    }
}
