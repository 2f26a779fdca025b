//! Route table and redirect targets.
//!
//! # Responsibilities
//! - Hold the three classification prefix sets plus the internal overlay
//! - Hold the fixed redirect targets (home, onboarding, sign-in)
//! - Compile both from validated configuration into one immutable value
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - No mutation API: changing routes means redeploying configuration
//! - Both evaluation sites receive the same compiled value by injection,
//!   never through ambient globals

use crate::config::schema::{DefaultRoutesConfig, GuardConfig, RoutesConfig};
use crate::policy::classify::Classification;

/// Prefix sets a path is classified against.
///
/// The three classification sets are disjoint by contract; a prefix in two
/// sets is a configuration bug caught by startup validation. The internal
/// set is an overlay for framework-reserved paths and is checked first.
#[derive(Debug, Clone)]
pub struct RouteTable {
    pub(crate) public: Vec<String>,
    pub(crate) onboarding: Vec<String>,
    pub(crate) protected: Vec<String>,
    pub(crate) internal: Vec<String>,
}

impl RouteTable {
    pub fn from_config(routes: &RoutesConfig) -> Self {
        Self {
            public: routes.public.clone(),
            onboarding: routes.onboarding.clone(),
            protected: routes.protected.clone(),
            internal: routes.internal.clone(),
        }
    }

    pub fn public_prefixes(&self) -> &[String] {
        &self.public
    }

    pub fn onboarding_prefixes(&self) -> &[String] {
        &self.onboarding
    }

    pub fn protected_prefixes(&self) -> &[String] {
        &self.protected
    }

    pub fn internal_prefixes(&self) -> &[String] {
        &self.internal
    }
}

/// Fixed redirect targets the decision engine points at.
///
/// Startup validation guarantees none of these can itself produce a redirect
/// under any reachable auth state.
#[derive(Debug, Clone)]
pub struct DefaultRoutes {
    pub home: String,
    pub onboarding: String,
    pub sign_in: String,
}

impl DefaultRoutes {
    pub fn from_config(defaults: &DefaultRoutesConfig) -> Self {
        Self {
            home: defaults.home.clone(),
            onboarding: defaults.onboarding.clone(),
            sign_in: defaults.sign_in.clone(),
        }
    }
}

/// The complete compiled policy: table plus targets.
///
/// This is the single value both the trusted server boundary and the
/// client-hint site evaluate against.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    table: RouteTable,
    defaults: DefaultRoutes,
}

impl RoutePolicy {
    pub fn new(table: RouteTable, defaults: DefaultRoutes) -> Self {
        Self { table, defaults }
    }

    pub fn from_config(config: &GuardConfig) -> Self {
        Self {
            table: RouteTable::from_config(&config.routes),
            defaults: DefaultRoutes::from_config(&config.defaults),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn defaults(&self) -> &DefaultRoutes {
        &self.defaults
    }

    /// Classify a request path against the table.
    pub fn classify(&self, path: &str) -> Classification {
        self.table.classify(path)
    }
}
