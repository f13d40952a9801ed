//! Ordered registry of monitored services.
//!
//! # Responsibilities
//! - Hold the monitored services in their configured order
//! - Resolve a service by name or by destination endpoint
//!
//! # Design Decisions
//! - Immutable after construction (shared by reference, no locks)
//! - Construction enforces unique ports and unique names
//! - O(n) lookups; the registry holds a handful of entries

use crate::config::loader::ConfigError;
use crate::config::validation::validate_services;
use crate::services::descriptor::ServiceDescriptor;

/// Address shared by every built-in service (the vulnbox).
pub const VM_IP: &str = "10.60.4.1";

/// Built-in services as `(name, port)`, in registry order.
pub const BUILTIN_SERVICES: [(&str, u16); 8] = [
    ("Trademark", 5000),
    ("RPN", 1337),
    ("closedsea", 3003),
    ("closedseaMinter", 3004),
    ("CyberUniAuth", 1234),
    ("ExamNotes", 1235),
    ("EncryptedNotes", 1236),
    ("ExamPortal", 1237),
];

/// The built-in services as descriptors.
pub fn default_services() -> Vec<ServiceDescriptor> {
    BUILTIN_SERVICES
        .iter()
        .map(|(name, port)| ServiceDescriptor::from_static(name, VM_IP, *port))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistry {
    services: Vec<ServiceDescriptor>,
}

impl ServiceRegistry {
    /// Build a registry, rejecting malformed or colliding entries.
    pub fn new(services: Vec<ServiceDescriptor>) -> Result<Self, ConfigError> {
        validate_services(&services).map_err(ConfigError::Validation)?;
        Ok(Self { services })
    }

    /// Registry holding the compiled-in service list.
    pub fn builtin() -> Self {
        Self {
            services: default_services(),
        }
    }

    /// All services, in configured order.
    pub fn list_services(&self) -> &[ServiceDescriptor] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.iter().find(|s| s.name() == name)
    }

    pub fn by_port(&self, port: u16) -> Option<&ServiceDescriptor> {
        self.services.iter().find(|s| s.port() == port)
    }

    /// Name of the service listening on a flow's destination, if monitored.
    pub fn service_tag(&self, dst_ip: &str, dst_port: u16) -> Option<&str> {
        self.services
            .iter()
            .find(|s| s.port() == dst_port && s.address() == dst_ip)
            .map(ServiceDescriptor::name)
    }

    /// JSON array in the shape served by the `/services` endpoint.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.services)
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a ServiceRegistry {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ValidationError;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_order_and_ports() {
        let registry = ServiceRegistry::builtin();
        let pairs: Vec<(&str, u16)> = registry
            .list_services()
            .iter()
            .map(|s| (s.name(), s.port()))
            .collect();
        assert_eq!(pairs, BUILTIN_SERVICES.to_vec());
        assert!(registry.list_services().iter().all(|s| s.address() == VM_IP));
    }

    #[test]
    fn test_builtin_literals_are_valid() {
        let services = default_services();
        for svc in &services {
            assert!(svc.validate().is_ok(), "{} failed validation", svc);
        }
        let ports: HashSet<u16> = services.iter().map(|s| s.port()).collect();
        assert_eq!(ports.len(), services.len());
        assert!(ServiceRegistry::new(services).is_ok());
    }

    #[test]
    fn test_lookup() {
        let registry = ServiceRegistry::builtin();
        assert_eq!(registry.by_name("closedsea").map(|s| s.port()), Some(3003));
        assert!(registry.by_name("ClosedSea").is_none());
        assert_eq!(registry.by_port(1236).map(|s| s.name()), Some("EncryptedNotes"));
        assert!(registry.by_port(22).is_none());

        assert_eq!(registry.service_tag("10.60.4.1", 1337), Some("RPN"));
        assert_eq!(registry.service_tag("10.60.4.2", 1337), None);
    }

    #[test]
    fn test_rejects_duplicate_ports() {
        let services = vec![
            ServiceDescriptor::new("a", "10.0.0.1", 80).unwrap(),
            ServiceDescriptor::new("b", "10.0.0.1", 80).unwrap(),
        ];
        match ServiceRegistry::new(services) {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.contains(&ValidationError::DuplicatePort {
                    port: 80,
                    first: "a".into(),
                    second: "b".into(),
                }));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_to_json_shape() {
        let json = ServiceRegistry::builtin().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 8);
        assert_eq!(arr[0]["name"], "Trademark");
        assert_eq!(arr[0]["ip"], "10.60.4.1");
        assert_eq!(arr[0]["port"], 5000);
    }
}
