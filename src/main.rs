//! Route access guard for the dashboard frontend.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                 ROUTE GUARD                    │
//!                      │                                                │
//!   Inbound Request    │  ┌─────────┐   ┌─────────┐   ┌─────────────┐  │
//!   ───────────────────┼─▶│  http   │──▶│ claims  │──▶│   policy    │  │
//!                      │  │ server  │   │resolver │   │classify+rule│  │
//!                      │  └─────────┘   └─────────┘   └──────┬──────┘  │
//!                      │                                     │         │
//!                      │                   Allow ◀───────────┴──▶ 307  │
//!                      │                     │                    │    │
//!   Page Layer ◀───────┼─────────────────────┘                    │    │
//!   Redirect   ◀───────┼──────────────────────────────────────────┘    │
//!                      │                                                │
//!                      │  ┌──────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns           │ │
//!                      │  │  ┌────────┐ ┌────────────┐ ┌───────────┐ │ │
//!                      │  │  │ config │ │observability│ │ lifecycle │ │ │
//!                      │  │  └────────┘ └────────────┘ └───────────┘ │ │
//!                      │  └──────────────────────────────────────────┘ │
//!                      └───────────────────────────────────────────────┘
//! ```
//!
//! The same compiled policy value is also handed to the client-hint site
//! (`hints::ClientGate`), so both evaluation sites share one rule table.

use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use route_guard::config::loader::load_config;
use route_guard::config::validation::validate_config;
use route_guard::{GuardConfig, GuardServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_guard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("route-guard v0.1.0 starting");

    // Load configuration; defaults carry the dashboard route table.
    // Validation failure is fatal here, before the listener binds.
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_config(&path)?,
        None => {
            let config = GuardConfig::default();
            if let Err(errors) = validate_config(&config) {
                for error in &errors {
                    tracing::error!(%error, "Invalid route configuration");
                }
                return Err("route configuration failed the startup self-check".into());
            }
            config
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        public_prefixes = config.routes.public.len(),
        onboarding_prefixes = config.routes.onboarding.len(),
        protected_prefixes = config.routes.protected.len(),
        "Configuration loaded"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            route_guard::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    // Create and run HTTP server
    let server = GuardServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
