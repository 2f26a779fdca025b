//! Route access guard middleware.
//!
//! Runs ahead of the page layer on every request: resolves the caller's auth
//! state from the session claim, evaluates the route policy, and either lets
//! the request continue or answers with a 307 redirect. Fail closed: any
//! defect during evaluation degrades to the sign-in redirect, never to
//! access.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use jsonwebtoken::DecodingKey;

use crate::http::claims::resolve_auth_state;
use crate::observability::metrics;
use crate::policy::{Classification, Decision, RoutePolicy};

/// State required by the guard.
#[derive(Clone)]
pub struct GuardState {
    pub policy: Arc<RoutePolicy>,
    pub decoding_key: Arc<DecodingKey>,
    pub cookie_name: String,
}

pub async fn guard_middleware(
    State(state): State<GuardState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let auth = resolve_auth_state(req.headers(), &state.cookie_name, &state.decoding_key);

    // The policy is total by contract; if it ever defects, the request
    // resolves to the sign-in redirect rather than passing through.
    let (classification, decision) = catch_unwind(AssertUnwindSafe(|| {
        let classification = state.policy.classify(&path);
        let decision = state.policy.decide(&path, classification, auth);
        (classification, decision)
    }))
    .unwrap_or_else(|_| {
        tracing::error!(path = %path, "Policy evaluation panicked");
        (
            Classification::Protected,
            Decision::RedirectTo(state.policy.defaults().sign_in.clone()),
        )
    });

    match decision {
        Decision::Allow => {
            metrics::record_decision("allow", classification);
            tracing::debug!(
                path = %path,
                classification = classification.as_str(),
                is_authenticated = auth.is_authenticated,
                "Request allowed"
            );
            next.run(req).await
        }
        Decision::RedirectTo(target) => {
            metrics::record_decision("redirect", classification);
            tracing::debug!(
                path = %path,
                classification = classification.as_str(),
                is_authenticated = auth.is_authenticated,
                needs_onboarding = auth.needs_onboarding,
                target = %target,
                "Request redirected"
            );
            Redirect::temporary(&target).into_response()
        }
    }
}
