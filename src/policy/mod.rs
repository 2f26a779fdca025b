//! Route access policy.
//!
//! # Data Flow
//! ```text
//! Incoming request (path) + resolved auth flags
//!     → classify.rs (path → Public | Onboarding | Protected)
//!     → decision.rs (classification + auth state → Allow | RedirectTo)
//!     → Return: Decision for the boundary to enforce
//!
//! Policy compilation (at startup):
//!     RoutesConfig + DefaultRoutesConfig
//!     → Validate (disjoint prefixes, loop-free targets)
//!     → Freeze as immutable RoutePolicy
//!     → Shared via Arc with the server boundary AND the client-hint site
//! ```
//!
//! # Design Decisions
//! - Policy compiled at startup, immutable at runtime
//! - No regex in the hot path (literal prefix matching only)
//! - Deterministic: same path and auth state always yield the same decision
//! - Fixed rule order, first match wins
//! - Fail closed: unknown paths are Protected, uncertainty redirects to sign-in
//! - One shared module for both evaluation sites; the rule table is never
//!   duplicated

pub mod classify;
pub mod decision;
pub mod table;

pub use classify::Classification;
pub use decision::{AuthState, Decision};
pub use table::{DefaultRoutes, RoutePolicy, RouteTable};
