//! HTTP boundary subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (axum setup, tracing, timeout, request ID)
//!     → claims.rs (session token → verified claim → AuthState)
//!     → guard.rs (policy evaluation → continue or 307 redirect)
//!     → page layer (stand-in handler; rendering lives elsewhere)
//! ```
//!
//! # Design Decisions
//! - The guard runs before any page work on every request
//! - Claim failures resolve to the anonymous state, never to a 5xx
//! - The boundary enforces decisions and logs them; the policy itself
//!   stays free of I/O

pub mod claims;
pub mod guard;
pub mod server;

pub use guard::GuardState;
pub use server::GuardServer;
