//! Service registry subsystem.
//!
//! # Data Flow
//! ```text
//! built-in literals / TOML [[services]]
//!     → descriptor.rs (per-record checks)
//!     → config validation (unique ports, unique names)
//!     → ServiceRegistry (ordered, immutable)
//!     → consumers: UI service filter, flow service tagging
//! ```

pub mod descriptor;
pub mod registry;

pub use descriptor::{DescriptorError, ServiceDescriptor};
pub use registry::{default_services, ServiceRegistry, BUILTIN_SERVICES, VM_IP};
