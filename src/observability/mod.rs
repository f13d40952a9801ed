//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / startup / tagging
//!     → tracing events with structured fields
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stderr
//! ```

pub mod logging;
