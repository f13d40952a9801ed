//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::services::{default_services, ServiceDescriptor};

/// Datastore endpoint used when `TULIP_MONGO` is unset.
pub const DEFAULT_MONGO_HOST: &str = "0.0.0.0:27017";

/// Flag format used when `REACT_APP_FLAG_REGEX` is unset.
pub const DEFAULT_FLAG_PATTERN: &str = "[A-Z0-9]{31}=";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TulipConfig {
    /// Datastore settings.
    pub mongo: MongoConfig,

    /// Flag format settings.
    pub flag: FlagConfig,

    /// Monitored services, in display order.
    pub services: Vec<ServiceDescriptor>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for TulipConfig {
    fn default() -> Self {
        Self {
            mongo: MongoConfig::default(),
            flag: FlagConfig::default(),
            services: default_services(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Datastore configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MongoConfig {
    /// `host:port` of the MongoDB server.
    pub host: String,
}

impl MongoConfig {
    /// Connection URI handed to datastore clients.
    pub fn uri(&self) -> String {
        format!("mongodb://{}/", self.host)
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MONGO_HOST.to_string(),
        }
    }
}

/// Flag format configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Regular expression describing a flag.
    pub pattern: String,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_FLAG_PATTERN.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TulipConfig::default();
        assert_eq!(config.mongo.host, "0.0.0.0:27017");
        assert_eq!(config.mongo.uri(), "mongodb://0.0.0.0:27017/");
        assert_eq!(config.flag.pattern, "[A-Z0-9]{31}=");
        assert_eq!(config.services.len(), 8);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TulipConfig = toml::from_str("[mongo]\nhost = \"db:27017\"\n").unwrap();
        assert_eq!(config.mongo.uri(), "mongodb://db:27017/");
        assert_eq!(config.flag.pattern, DEFAULT_FLAG_PATTERN);
        assert_eq!(config.services.len(), 8);
    }

    #[test]
    fn test_services_override() {
        let raw = r#"
            [[services]]
            ip = "10.0.0.5"
            port = 8000
            name = "Bank"
        "#;
        let config: TulipConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.services.len(), 1);
        assert_eq!(config.services[0].name(), "Bank");
        assert_eq!(config.services[0].address(), "10.0.0.5");
    }
}
