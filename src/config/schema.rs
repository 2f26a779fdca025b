//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the guard.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the route access guard.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The route prefix sets paths are classified against.
    pub routes: RoutesConfig,

    /// Redirect targets the decision engine points at.
    pub defaults: DefaultRoutesConfig,

    /// Session claim settings.
    pub auth: AuthConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Route prefix sets.
///
/// Prefixes are literal strings, not patterns. A prefix covers itself and
/// every nested sub-path, so listing `/home-page` protects the whole
/// `/home-page/...` family. The same prefix must not appear in more than one
/// of the three classification lists.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Reachable without a session: sign-in, sign-up, webhook callbacks.
    pub public: Vec<String>,

    /// The one-time guided setup flow for new users.
    pub onboarding: Vec<String>,

    /// Dashboard sections requiring a settled, authenticated session.
    pub protected: Vec<String>,

    /// Framework-reserved and static-asset roots, always served.
    pub internal: Vec<String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            public: vec![
                "/sign-in".to_string(),
                "/sign-up".to_string(),
                "/api/webhooks".to_string(),
            ],
            onboarding: vec!["/onboarding".to_string()],
            protected: vec![
                "/home-page".to_string(),
                "/fraud-page".to_string(),
                "/revenue-page".to_string(),
                "/market-page".to_string(),
                "/statistics-page".to_string(),
                "/profile-page".to_string(),
            ],
            internal: vec![
                "/_next".to_string(),
                "/static".to_string(),
                "/assets".to_string(),
            ],
        }
    }
}

/// Redirect targets.
///
/// Validation requires sign-in to classify Public, onboarding to classify
/// Onboarding, and home to classify Protected without being the bare root.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultRoutesConfig {
    /// Where settled users land (root redirect, post-onboarding bounce).
    pub home: String,

    /// Where users with pending onboarding are sent.
    pub onboarding: String,

    /// Where anonymous visitors are sent.
    pub sign_in: String,
}

impl Default for DefaultRoutesConfig {
    fn default() -> Self {
        Self {
            home: "/home-page".to_string(),
            onboarding: "/onboarding".to_string(),
            sign_in: "/sign-in".to_string(),
        }
    }
}

/// Session claim settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Secret the identity provider signs session tokens with.
    pub jwt_secret: String,

    /// Cookie carrying the session token.
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            // WARNING: This is a placeholder! Change this in production.
            jwt_secret: "CHANGE_ME_IN_PRODUCTION".to_string(),
            cookie_name: "session".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
