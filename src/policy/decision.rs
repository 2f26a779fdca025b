//! Redirect decision engine.
//!
//! # Responsibilities
//! - Combine a classification with per-request auth flags
//! - Produce exactly one decision: allow, or redirect to a fixed target
//!
//! # Design Decisions
//! - Fixed rule order, first applicable rule wins; the public rule stays
//!   first so the sign-in target itself can never redirect
//! - Every redirect target re-evaluates to Allow under the same auth state;
//!   startup validation refuses configurations that break this
//! - Pure and total: no I/O, no clock, no hidden state, never errors
//! - Symmetric: the onboarding rules fire in both directions at every
//!   evaluation site

use crate::policy::classify::Classification;
use crate::policy::table::RoutePolicy;

/// Per-request auth flags, resolved upstream from a verified claim and
/// discarded after the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub needs_onboarding: bool,
}

impl AuthState {
    /// State assigned when no claim is present or the claim fails to decode.
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            needs_onboarding: false,
        }
    }
}

/// Outcome of one policy evaluation, enforced by the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(String),
}

impl RoutePolicy {
    /// Apply the redirect rules to an already-classified path.
    pub fn decide(&self, path: &str, classification: Classification, auth: AuthState) -> Decision {
        // Unauthenticated visitors must reach sign-in, sign-up, webhook and
        // asset paths unconditionally.
        if classification == Classification::Public {
            return Decision::Allow;
        }
        if !auth.is_authenticated {
            return Decision::RedirectTo(self.defaults().sign_in.clone());
        }
        if auth.needs_onboarding && classification != Classification::Onboarding {
            return Decision::RedirectTo(self.defaults().onboarding.clone());
        }
        if !auth.needs_onboarding && classification == Classification::Onboarding {
            return Decision::RedirectTo(self.defaults().home.clone());
        }
        // The bare root has no page of its own; send settled users home.
        if path == "/" && classification == Classification::Protected {
            return Decision::RedirectTo(self.defaults().home.clone());
        }
        Decision::Allow
    }

    /// Classify and decide in one step.
    pub fn evaluate(&self, path: &str, auth: AuthState) -> Decision {
        let classification = self.classify(path);
        self.decide(path, classification, auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::GuardConfig;

    fn policy() -> RoutePolicy {
        RoutePolicy::from_config(&GuardConfig::default())
    }

    fn auth(is_authenticated: bool, needs_onboarding: bool) -> AuthState {
        AuthState {
            is_authenticated,
            needs_onboarding,
        }
    }

    #[test]
    fn test_public_paths_allowed_for_everyone() {
        let policy = policy();
        assert_eq!(policy.evaluate("/sign-in", auth(false, false)), Decision::Allow);
        assert_eq!(policy.evaluate("/sign-in", auth(true, true)), Decision::Allow);
        assert_eq!(policy.evaluate("/api/webhooks/clerk", auth(false, false)), Decision::Allow);
    }

    #[test]
    fn test_unauthenticated_redirects_to_sign_in() {
        let policy = policy();
        assert_eq!(
            policy.evaluate("/home-page", auth(false, false)),
            Decision::RedirectTo("/sign-in".to_string())
        );
        assert_eq!(
            policy.evaluate("/unknown", auth(false, false)),
            Decision::RedirectTo("/sign-in".to_string())
        );
    }

    #[test]
    fn test_pending_onboarding_redirects_off_protected_pages() {
        let policy = policy();
        assert_eq!(
            policy.evaluate("/home-page", auth(true, true)),
            Decision::RedirectTo("/onboarding".to_string())
        );
        assert_eq!(policy.evaluate("/onboarding", auth(true, true)), Decision::Allow);
        assert_eq!(policy.evaluate("/onboarding/step-2", auth(true, true)), Decision::Allow);
    }

    #[test]
    fn test_settled_user_bounced_off_onboarding() {
        let policy = policy();
        assert_eq!(
            policy.evaluate("/onboarding", auth(true, false)),
            Decision::RedirectTo("/home-page".to_string())
        );
    }

    #[test]
    fn test_root_redirects_authenticated_user_home() {
        let policy = policy();
        assert_eq!(
            policy.evaluate("/", auth(true, false)),
            Decision::RedirectTo("/home-page".to_string())
        );
        // Root is still fail-closed for anonymous visitors.
        assert_eq!(
            policy.evaluate("/", auth(false, false)),
            Decision::RedirectTo("/sign-in".to_string())
        );
    }

    #[test]
    fn test_protected_section_allowed_once_settled() {
        let policy = policy();
        assert_eq!(policy.evaluate("/fraud-page/analytics", auth(true, false)), Decision::Allow);
        assert_eq!(policy.evaluate("/revenue-page", auth(true, false)), Decision::Allow);
    }

    #[test]
    fn test_decision_is_idempotent() {
        let policy = policy();
        for state in [
            auth(false, false),
            auth(false, true),
            auth(true, false),
            auth(true, true),
        ] {
            let first = policy.evaluate("/market-page/segments", state);
            let second = policy.evaluate("/market-page/segments", state);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_every_redirect_settles_in_one_hop() {
        let policy = policy();
        let paths = [
            "/", "/sign-in", "/sign-up", "/onboarding", "/onboarding/step-2",
            "/home-page", "/home-page/widgets/42", "/fraud-page/analytics",
            "/revenue-page", "/market-page", "/statistics-page", "/unknown",
        ];
        for is_authenticated in [false, true] {
            for needs_onboarding in [false, true] {
                let state = auth(is_authenticated, needs_onboarding);
                for path in paths {
                    if let Decision::RedirectTo(target) = policy.evaluate(path, state) {
                        assert_eq!(
                            policy.evaluate(&target, state),
                            Decision::Allow,
                            "redirect {path} -> {target} must settle under {state:?}"
                        );
                    }
                }
            }
        }
    }
}
