//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Guard decisions:
//!     → tracing events (path, classification, outcome, request ID)
//!     → metrics.rs (decision counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through all log events via the request-id layer
//! - Metric updates are cheap (atomic increments)
//! - Labels for decision outcome and classification only; paths are
//!   unbounded and never become label values

pub mod metrics;
