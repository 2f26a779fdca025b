//! Client-hint evaluation site.
//!
//! The browser-rendered frontend keeps a cached copy of the auth flags and
//! wants to answer, without a round trip, which navigation links to surface
//! and whether a fetch for a path would survive the boundary. Both questions
//! are answered against the same compiled `RoutePolicy` the server boundary
//! uses; this module adds nothing to the rules, so the two sites cannot
//! diverge.

use std::sync::Arc;

use crate::policy::{AuthState, Decision, RoutePolicy};

/// Policy view bound to one visitor's cached auth flags.
#[derive(Clone)]
pub struct ClientGate {
    policy: Arc<RoutePolicy>,
    auth: AuthState,
}

impl ClientGate {
    pub fn new(policy: Arc<RoutePolicy>, auth: AuthState) -> Self {
        Self { policy, auth }
    }

    /// True if the boundary would let a request for `path` through, so a
    /// prefetch or render for it is worth starting.
    pub fn can_visit(&self, path: &str) -> bool {
        self.policy.evaluate(path, self.auth) == Decision::Allow
    }

    /// Where a navigation to `path` will actually land. Redirect targets
    /// settle in one hop, so a single re-resolution suffices.
    pub fn resolve(&self, path: &str) -> String {
        match self.policy.evaluate(path, self.auth) {
            Decision::Allow => path.to_string(),
            Decision::RedirectTo(target) => target,
        }
    }

    /// Protected sections the visitor can currently reach, for building the
    /// sidebar navigation.
    pub fn visible_sections(&self) -> Vec<&str> {
        self.policy
            .table()
            .protected_prefixes()
            .iter()
            .map(String::as_str)
            .filter(|prefix| self.can_visit(prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::GuardConfig;

    fn gate(is_authenticated: bool, needs_onboarding: bool) -> ClientGate {
        let policy = Arc::new(RoutePolicy::from_config(&GuardConfig::default()));
        ClientGate::new(
            policy,
            AuthState {
                is_authenticated,
                needs_onboarding,
            },
        )
    }

    #[test]
    fn test_anonymous_visitor_sees_no_sections() {
        let gate = gate(false, false);
        assert!(gate.visible_sections().is_empty());
        assert!(!gate.can_visit("/fraud-page"));
        assert!(gate.can_visit("/sign-in"));
    }

    #[test]
    fn test_settled_visitor_sees_all_sections() {
        let gate = gate(true, false);
        let sections = gate.visible_sections();
        assert!(sections.contains(&"/home-page"));
        assert!(sections.contains(&"/statistics-page"));
        assert_eq!(sections.len(), 6);
    }

    #[test]
    fn test_onboarding_visitor_sees_no_sections_yet() {
        let gate = gate(true, true);
        assert!(gate.visible_sections().is_empty());
        assert!(gate.can_visit("/onboarding"));
    }

    #[test]
    fn test_resolve_follows_the_server_decision() {
        assert_eq!(gate(false, false).resolve("/revenue-page"), "/sign-in");
        assert_eq!(gate(true, true).resolve("/revenue-page"), "/onboarding");
        assert_eq!(gate(true, false).resolve("/revenue-page"), "/revenue-page");
        assert_eq!(gate(true, false).resolve("/"), "/home-page");
    }
}
