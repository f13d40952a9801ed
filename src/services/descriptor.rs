//! Monitored service descriptor.
//!
//! # Responsibilities
//! - Identify one network-reachable service by name, address and port
//! - Reject malformed records at construction
//!
//! # Design Decisions
//! - Fields are private; a descriptor never changes after it is built
//! - Serialized as `{ip, port, name}` so the web layer can consume it as-is
//! - Address may be an IP literal or an RFC 1123 hostname

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a descriptor is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Service name is empty or whitespace.
    #[error("service name must not be empty")]
    EmptyName,

    /// Port 0 is not a connectable port.
    #[error("port {0} is outside 1..=65535")]
    InvalidPort(u16),

    /// Address is neither an IP literal nor a valid hostname.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
}

/// A monitored endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    #[serde(rename = "ip", alias = "address")]
    address: String,
    port: u16,
    name: String,
}

impl ServiceDescriptor {
    /// Build a validated descriptor.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        port: u16,
    ) -> Result<Self, DescriptorError> {
        let descriptor = Self {
            address: address.into(),
            port,
            name: name.into(),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Build from compiled-in literals known to be well-formed.
    pub(crate) fn from_static(name: &str, address: &str, port: u16) -> Self {
        Self {
            address: address.to_string(),
            port,
            name: name.to_string(),
        }
    }

    /// Check the record's invariants.
    ///
    /// Deserialized descriptors bypass [`ServiceDescriptor::new`], so config
    /// validation calls this explicitly.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        if self.port == 0 {
            return Err(DescriptorError::InvalidPort(self.port));
        }
        if !is_valid_address(&self.address) {
            return Err(DescriptorError::InvalidAddress(self.address.clone()));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `address:port`, the form used for destination filters.
    pub fn endpoint(&self) -> String {
        match self.address.parse::<IpAddr>() {
            Ok(IpAddr::V6(_)) => format!("[{}]:{}", self.address, self.port),
            _ => format!("{}:{}", self.address, self.port),
        }
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.endpoint())
    }
}

fn is_valid_address(address: &str) -> bool {
    address.parse::<IpAddr>().is_ok() || is_valid_hostname(address)
}

fn is_valid_hostname(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() || host.len() > 253 {
        return false;
    }
    // A dotted all-numeric name is a mistyped IPv4 literal, not a hostname.
    if host.split('.').all(|label| label.chars().all(|c| c.is_ascii_digit())) {
        return false;
    }
    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
