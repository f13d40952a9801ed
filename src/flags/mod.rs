//! Flag detection subsystem.
//!
//! # Data Flow
//! ```text
//! REACT_APP_FLAG_REGEX (captured at startup)
//!     → matcher.rs (compile anchored + scanning forms)
//!     → contains_flag(text): anchored at position 0
//!     → tagging.rs: scan flow items → flag-in / flag-out
//! ```
//!
//! # Design Decisions
//! - Compiled once, immutable, shared across threads
//! - Anchored matching is the only mode `contains_flag` uses

pub mod matcher;
pub mod tagging;

pub use matcher::FlagMatcher;
pub use tagging::{flag_tags, Direction, FlagTag, FlowItem};
