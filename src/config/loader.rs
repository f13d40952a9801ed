//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{ObservabilityConfig, TulipConfig};
use crate::config::validation::{validate_config, ValidationError};

/// `host:port` of the MongoDB server.
pub const MONGO_ENV: &str = "TULIP_MONGO";

/// Flag format regular expression.
pub const FLAG_REGEX_ENV: &str = "REACT_APP_FLAG_REGEX";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TulipConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Defaults overridden by the process environment, validated.
pub fn from_env() -> Result<TulipConfig, ConfigError> {
    from_lookup(env_lookup)
}

/// Defaults overridden by `lookup`, validated.
///
/// `lookup` stands in for the process environment.
pub fn from_lookup<F>(lookup: F) -> Result<TulipConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    load_with(None, lookup)
}

/// Optional TOML file, then environment overrides, then validation.
pub fn load(path: Option<&Path>) -> Result<TulipConfig, ConfigError> {
    load_with(path, env_lookup)
}

/// Like [`load`] with an explicit variable lookup.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<TulipConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => TulipConfig::default(),
    };
    apply_env_overrides(&mut config, lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply `TULIP_MONGO` and `REACT_APP_FLAG_REGEX` when set.
///
/// A variable set to the empty string is applied as-is.
pub fn apply_env_overrides<F>(config: &mut TulipConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(MONGO_ENV) {
        tracing::debug!(var = MONGO_ENV, value = %host, "Environment override");
        config.mongo.host = host;
    }
    if let Some(pattern) = lookup(FLAG_REGEX_ENV) {
        tracing::debug!(var = FLAG_REGEX_ENV, value = %pattern, "Environment override");
        config.flag.pattern = pattern;
    }
}

/// Log level from the config file, if one is given and readable.
///
/// Read ahead of [`load`] so logging is up before overrides are reported;
/// file errors are left for [`load`] to report.
pub fn configured_log_level(path: Option<&Path>) -> String {
    path.and_then(|path| read_config(path).ok())
        .map(|config| config.observability.log_level)
        .unwrap_or_else(|| ObservabilityConfig::default().log_level)
}

fn read_config(path: &Path) -> Result<TulipConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: TulipConfig = toml::from_str(&content)?;
    Ok(config)
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.mongo.uri(), "mongodb://0.0.0.0:27017/");
        assert_eq!(config.flag.pattern, "[A-Z0-9]{31}=");
    }

    #[test]
    fn test_env_overrides() {
        let config = from_lookup(lookup_from(&[
            (MONGO_ENV, "mongo:27018"),
            (FLAG_REGEX_ENV, "FLAG\\{\\w+\\}"),
        ]))
        .unwrap();
        assert_eq!(config.mongo.uri(), "mongodb://mongo:27018/");
        assert_eq!(config.flag.pattern, "FLAG\\{\\w+\\}");
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let err = from_lookup(lookup_from(&[(FLAG_REGEX_ENV, "(")])).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(
                    errors[0],
                    ValidationError::InvalidFlagPattern { .. }
                ));
            }
            other => panic!("expected validation error, got {}", other),
        }
    }

    #[test]
    fn test_empty_mongo_env_is_rejected() {
        let err = from_lookup(lookup_from(&[(MONGO_ENV, "")])).unwrap_err();
        assert!(err.to_string().contains("mongo host must not be empty"));
    }

    #[test]
    fn test_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[mongo]\nhost = \"file-db:27017\"\n\n[flag]\npattern = \"CTF[0-9]+\"\n\n\
             [[services]]\nip = \"10.0.0.9\"\nport = 9000\nname = \"Solo\""
        )
        .unwrap();

        let from_file = load_config(file.path()).unwrap();
        assert_eq!(from_file.mongo.host, "file-db:27017");
        assert_eq!(from_file.services.len(), 1);

        let merged =
            load_with(Some(file.path()), lookup_from(&[(MONGO_ENV, "env-db:1")])).unwrap();
        assert_eq!(merged.mongo.host, "env-db:1");
        assert_eq!(merged.flag.pattern, "CTF[0-9]+");
        assert_eq!(merged.services[0].port(), 9000);
    }

    #[test]
    fn test_configured_log_level() {
        assert_eq!(configured_log_level(None), "info");
        assert_eq!(configured_log_level(Some(Path::new("/nonexistent/tulip.toml"))), "info");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[observability]\nlog_level = \"debug\"").unwrap();
        assert_eq!(configured_log_level(Some(file.path())), "debug");
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let missing = load_config(Path::new("/nonexistent/tulip.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mongo\nhost = 1").unwrap();
        let malformed = load_config(file.path()).unwrap_err();
        assert!(matches!(malformed, ConfigError::Parse(_)));
    }
}
