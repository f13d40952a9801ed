//! Tulip service registry and flag detection.
//!
//! Static configuration consumed by the Tulip CTF traffic monitor: the
//! monitored services, the datastore endpoint and the flag format.

pub mod cli;
pub mod config;
pub mod flags;
pub mod lifecycle;
pub mod observability;
pub mod services;

pub use config::{ConfigError, TulipConfig};
pub use flags::FlagMatcher;
pub use lifecycle::TulipContext;
pub use services::{ServiceDescriptor, ServiceRegistry};
