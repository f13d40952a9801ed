//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the flag pattern compiles
//! - Check service records and their uniqueness (ports, names)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TulipConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::TulipConfig;
use crate::flags::FlagMatcher;
use crate::services::{DescriptorError, ServiceDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mongo host must not be empty")]
    EmptyMongoHost,

    #[error("flag pattern '{pattern}' is not a valid regular expression: {reason}")]
    InvalidFlagPattern { pattern: String, reason: String },

    #[error("service #{index}: {source}")]
    InvalidService {
        index: usize,
        #[source]
        source: DescriptorError,
    },

    #[error("port {port} is used by both '{first}' and '{second}'")]
    DuplicatePort {
        port: u16,
        first: String,
        second: String,
    },

    #[error("service name '{0}' is defined more than once")]
    DuplicateName(String),
}

/// Validate a complete configuration.
pub fn validate_config(config: &TulipConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.mongo.host.trim().is_empty() {
        errors.push(ValidationError::EmptyMongoHost);
    }

    if let Err(e) = FlagMatcher::new(&config.flag.pattern) {
        errors.push(ValidationError::InvalidFlagPattern {
            pattern: config.flag.pattern.clone(),
            reason: e.to_string(),
        });
    }

    if let Err(service_errors) = validate_services(&config.services) {
        errors.extend(service_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate service records and the registry's uniqueness invariants.
pub fn validate_services(services: &[ServiceDescriptor]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut ports: HashMap<u16, &str> = HashMap::new();
    let mut names: HashMap<&str, usize> = HashMap::new();

    for (index, svc) in services.iter().enumerate() {
        if let Err(source) = svc.validate() {
            errors.push(ValidationError::InvalidService { index, source });
        }

        if let Some(first) = ports.get(&svc.port()) {
            errors.push(ValidationError::DuplicatePort {
                port: svc.port(),
                first: first.to_string(),
                second: svc.name().to_string(),
            });
        } else {
            ports.insert(svc.port(), svc.name());
        }

        let seen = names.entry(svc.name()).or_insert(0);
        *seen += 1;
        // Report each duplicated name once
        if *seen == 2 {
            errors.push(ValidationError::DuplicateName(svc.name().to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
