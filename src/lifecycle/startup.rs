//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn a resolved configuration into a ready context
//! - Build the service registry and compile the flag matcher
//! - Publish the result as the process-wide context
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The context is captured once; later installs return the first one
//! - Callers that need alternate settings build their own `TulipContext`

use once_cell::sync::OnceCell;

use crate::config::loader::{self, ConfigError};
use crate::config::validation::ValidationError;
use crate::config::TulipConfig;
use crate::flags::FlagMatcher;
use crate::services::{ServiceDescriptor, ServiceRegistry};

static GLOBAL: OnceCell<TulipContext> = OnceCell::new();

/// Everything resolved at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct TulipContext {
    config: TulipConfig,
    registry: ServiceRegistry,
    matcher: FlagMatcher,
}

impl TulipContext {
    /// Build a context from a configuration.
    pub fn from_config(config: TulipConfig) -> Result<Self, ConfigError> {
        let matcher = FlagMatcher::new(&config.flag.pattern).map_err(|e| {
            ConfigError::Validation(vec![ValidationError::InvalidFlagPattern {
                pattern: config.flag.pattern.clone(),
                reason: e.to_string(),
            }])
        })?;
        let registry = ServiceRegistry::new(config.services.clone())?;

        Ok(Self {
            config,
            registry,
            matcher,
        })
    }

    /// Build a context from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(loader::from_env()?)
    }

    pub fn config(&self) -> &TulipConfig {
        &self.config
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    pub fn matcher(&self) -> &FlagMatcher {
        &self.matcher
    }

    /// `mongodb://<host:port>/`
    pub fn mongo_uri(&self) -> String {
        self.config.mongo.uri()
    }

    pub fn list_services(&self) -> &[ServiceDescriptor] {
        self.registry.list_services()
    }

    pub fn contains_flag(&self, text: &str) -> bool {
        self.matcher.contains_flag(text)
    }
}

/// Build the context from a resolved configuration and install it.
pub fn startup(config: TulipConfig) -> Result<&'static TulipContext, ConfigError> {
    let ctx = TulipContext::from_config(config)?;

    tracing::info!(
        mongo_uri = %ctx.mongo_uri(),
        flag_pattern = %ctx.matcher().pattern(),
        services = ctx.registry().len(),
        "Configuration loaded"
    );
    Ok(install(ctx))
}

/// Publish `ctx` as the process-wide context.
///
/// Only the first call takes effect; every call returns the installed context.
pub fn install(ctx: TulipContext) -> &'static TulipContext {
    let mut fresh = false;
    let installed = GLOBAL.get_or_init(|| {
        fresh = true;
        ctx
    });
    if !fresh {
        tracing::warn!("Context already installed; keeping the startup configuration");
    }
    installed
}

/// The process-wide context, once installed.
pub fn global() -> Option<&'static TulipContext> {
    GLOBAL.get()
}

/// The installed context, or one built from the environment and installed now.
pub fn global_or_init() -> Result<&'static TulipContext, ConfigError> {
    GLOBAL.get_or_try_init(TulipContext::from_env)
}
