//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → TULIP_MONGO / REACT_APP_FLAG_REGEX overrides (loader.rs)
//!     → validation.rs (semantic checks, all errors reported)
//!     → TulipConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is resolved once at startup and never re-read
//! - All fields have defaults to allow minimal configs
//! - Environment beats file, file beats defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, FLAG_REGEX_ENV, MONGO_ENV};
pub use schema::{FlagConfig, MongoConfig, ObservabilityConfig, TulipConfig};
pub use schema::{DEFAULT_FLAG_PATTERN, DEFAULT_MONGO_HOST};
pub use validation::ValidationError;
