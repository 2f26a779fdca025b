//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the guard layer ahead of the page layer
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind to a listener and serve with graceful shutdown
//!
//! # Design Decisions
//! - The page handler is a stand-in for the rendering layer: requests the
//!   guard allows land there and echo their path, which is what the
//!   integration tests observe
//! - The compiled policy is exposed so other evaluation sites (the
//!   client-hint module) share the exact same value

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request},
    middleware,
    response::IntoResponse,
    routing::any,
    Router,
};
use jsonwebtoken::DecodingKey;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GuardConfig;
use crate::http::guard::{guard_middleware, GuardState};
use crate::policy::RoutePolicy;

/// HTTP server for the route access guard.
pub struct GuardServer {
    router: Router,
    config: GuardConfig,
    policy: Arc<RoutePolicy>,
}

impl GuardServer {
    /// Create a new server with the given (already validated) configuration.
    pub fn new(config: GuardConfig) -> Self {
        let policy = Arc::new(RoutePolicy::from_config(&config));

        let state = GuardState {
            policy: policy.clone(),
            decoding_key: Arc::new(DecodingKey::from_secret(config.auth.jwt_secret.as_bytes())),
            cookie_name: config.auth.cookie_name.clone(),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            policy,
        }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &GuardConfig, state: GuardState) -> Router {
        let x_request_id = HeaderName::from_static("x-request-id");
        Router::new()
            .route("/{*path}", any(page_handler))
            .route("/", any(page_handler))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::new(x_request_id))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(middleware::from_fn_with_state(state, guard_middleware)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The compiled policy value, for sharing with other evaluation sites.
    pub fn policy(&self) -> Arc<RoutePolicy> {
        self.policy.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}

/// Stand-in for the page-rendering layer. Only requests the guard allowed
/// ever reach it.
async fn page_handler(req: Request<Body>) -> impl IntoResponse {
    req.uri().path().to_string()
}
