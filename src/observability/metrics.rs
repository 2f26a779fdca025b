//! Metrics collection and exposition.
//!
//! # Metrics
//! - `guard_decisions_total` (counter): decisions by outcome, classification
//!
//! # Design Decisions
//! - Prometheus exporter on its own listener, separate from traffic
//! - Recording never fails and never blocks the request path

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::policy::Classification;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "guard_decisions_total",
                "Policy decisions by outcome and classification"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Count one policy decision.
pub fn record_decision(outcome: &'static str, classification: Classification) {
    counter!(
        "guard_decisions_total",
        "outcome" => outcome,
        "classification" => classification.as_str()
    )
    .increment(1);
}
