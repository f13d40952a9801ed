//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! process start
//!     → startup.rs (build registry, compile matcher)
//!     → install (captured once, shared as &'static)
//!     → consumers read it for the rest of the process
//! ```

pub mod startup;

pub use startup::{global, global_or_init, install, startup, TulipContext};
