//! Route access guard for a dashboard frontend.
//!
//! Classifies every request path, combines the classification with the
//! caller's session claims, and decides whether the request proceeds to the
//! page layer or is redirected (to sign-in, onboarding, or home). The policy
//! core is pure and shared between the trusted server boundary and the
//! client-hint site.

pub mod config;
pub mod hints;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod policy;

pub use config::schema::GuardConfig;
pub use hints::ClientGate;
pub use http::GuardServer;
pub use lifecycle::Shutdown;
pub use policy::{AuthState, Classification, Decision, RoutePolicy};
