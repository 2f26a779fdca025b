//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks incl. the anti-loop self-check)
//!     → GuardConfig (validated, immutable)
//!     → compiled into RoutePolicy, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changing routes means redeploying
//! - All fields have defaults so an empty config file is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - Semantic validation returns all errors, not just the first, and a
//!   failing config is fatal at boot; silent misconfiguration produces
//!   redirect loops in production

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AuthConfig;
pub use schema::GuardConfig;
pub use schema::ListenerConfig;
pub use schema::RoutesConfig;
