//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the three classification sets stay disjoint
//! - Check each default target classifies the way the engine relies on
//! - Anti-loop self-check: every redirect the engine can produce must
//!   re-evaluate to Allow under the same auth state
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GuardConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted; failure is fatal at boot

use thiserror::Error;

use crate::config::schema::GuardConfig;
use crate::policy::{AuthState, Classification, Decision, RoutePolicy};

/// A single semantic problem with a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("empty prefix in `routes.{list}`")]
    EmptyPrefix { list: &'static str },

    #[error("prefix `{prefix}` in `routes.{list}` must start with '/'")]
    PrefixMissingSlash { list: &'static str, prefix: String },

    #[error("prefix `{prefix}` in `routes.{list}` must not end with '/'")]
    PrefixTrailingSlash { list: &'static str, prefix: String },

    #[error("prefix `{prefix}` appears in both `routes.{first}` and `routes.{second}`")]
    OverlappingPrefix {
        prefix: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("default {role} route `{path}` classifies as {found}, expected {expected}")]
    DefaultRouteMisclassified {
        role: &'static str,
        path: String,
        found: &'static str,
        expected: &'static str,
    },

    #[error("default home route must not be the bare root `/`")]
    HomeIsRoot,

    #[error(
        "redirect target `{target}` does not settle to allow when \
         is_authenticated={is_authenticated}, needs_onboarding={needs_onboarding}"
    )]
    RedirectLoop {
        target: String,
        is_authenticated: bool,
        needs_onboarding: bool,
    },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GuardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let lists: [(&'static str, &[String]); 4] = [
        ("public", &config.routes.public),
        ("onboarding", &config.routes.onboarding),
        ("protected", &config.routes.protected),
        ("internal", &config.routes.internal),
    ];

    for (name, prefixes) in lists {
        for prefix in prefixes {
            if prefix.is_empty() {
                errors.push(ValidationError::EmptyPrefix { list: name });
            } else if !prefix.starts_with('/') {
                errors.push(ValidationError::PrefixMissingSlash {
                    list: name,
                    prefix: prefix.clone(),
                });
            } else if prefix.ends_with('/') {
                errors.push(ValidationError::PrefixTrailingSlash {
                    list: name,
                    prefix: prefix.clone(),
                });
            }
        }
    }

    // The three classification sets must stay disjoint; a shared prefix
    // makes a path's category depend on evaluation order.
    let classification_lists: [(&'static str, &[String]); 3] = [
        ("public", &config.routes.public),
        ("onboarding", &config.routes.onboarding),
        ("protected", &config.routes.protected),
    ];
    for (i, &(first, first_prefixes)) in classification_lists.iter().enumerate() {
        for &(second, second_prefixes) in classification_lists.iter().skip(i + 1) {
            for prefix in first_prefixes {
                if second_prefixes.contains(prefix) {
                    errors.push(ValidationError::OverlappingPrefix {
                        prefix: prefix.clone(),
                        first,
                        second,
                    });
                }
            }
        }
    }

    let policy = RoutePolicy::from_config(config);
    check_default_targets(&policy, &mut errors);
    check_redirects_settle(&policy, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Each default target must classify to the category the rule order leans on.
fn check_default_targets(policy: &RoutePolicy, errors: &mut Vec<ValidationError>) {
    let defaults = policy.defaults();
    let expectations = [
        ("sign-in", &defaults.sign_in, Classification::Public),
        ("onboarding", &defaults.onboarding, Classification::Onboarding),
        ("home", &defaults.home, Classification::Protected),
    ];
    for (role, path, expected) in expectations {
        let found = policy.classify(path);
        if found != expected {
            errors.push(ValidationError::DefaultRouteMisclassified {
                role,
                path: path.clone(),
                found: found.as_str(),
                expected: expected.as_str(),
            });
        }
    }
    if defaults.home == "/" {
        errors.push(ValidationError::HomeIsRoot);
    }
}

/// For every reachable auth state, any redirect produced for a default
/// target must land on a path the same state is allowed to visit.
fn check_redirects_settle(policy: &RoutePolicy, errors: &mut Vec<ValidationError>) {
    let defaults = policy.defaults();
    let targets = [&defaults.sign_in, &defaults.onboarding, &defaults.home];
    for is_authenticated in [false, true] {
        for needs_onboarding in [false, true] {
            let state = AuthState {
                is_authenticated,
                needs_onboarding,
            };
            for target in targets {
                if let Decision::RedirectTo(next) = policy.evaluate(target, state) {
                    if policy.evaluate(&next, state) != Decision::Allow {
                        errors.push(ValidationError::RedirectLoop {
                            target: next,
                            is_authenticated,
                            needs_onboarding,
                        });
                    }
                }
            }
        }
    }
}
