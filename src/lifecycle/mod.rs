//! Lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT / test trigger
//!     → shutdown.rs (broadcast to all subscribers)
//!     → HTTP server drains in-flight requests and stops
//! ```
//!
//! # Design Decisions
//! - One broadcast channel; every long-running task subscribes
//! - Signals are translated to the same channel as programmatic triggers,
//!   so tests and the binary shut down through one path

pub mod shutdown;

pub use shutdown::Shutdown;
