//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AdapterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `gateway.base_url`.
pub const GATEWAY_URL_ENV_VAR: &str = "ARWEAVE_GATEWAY_URL";
/// Environment variable overriding `gateway.graphql_url`.
pub const GRAPHQL_URL_ENV_VAR: &str = "ARWEAVE_GRAPHQL_URL";
/// Environment variable overriding `gateway.timeout_ms`.
pub const TIMEOUT_ENV_VAR: &str = "ARWEAVE_TIMEOUT_MS";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, value } => {
                write!(f, "Invalid value '{}' in environment variable {}", value, var)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AdapterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AdapterConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `ARWEAVE_*` environment overrides on top of a loaded config.
pub fn apply_env_overrides(config: &mut AdapterConfig) -> Result<(), ConfigError> {
    apply_overrides(config, |var| std::env::var(var).ok())
}

fn apply_overrides<F>(config: &mut AdapterConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(GATEWAY_URL_ENV_VAR) {
        config.gateway.base_url = url;
    }
    if let Some(url) = lookup(GRAPHQL_URL_ENV_VAR) {
        config.gateway.graphql_url = Some(url);
    }
    if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
        config.gateway.timeout_ms = raw.trim().parse().map_err(|_| ConfigError::Env {
            var: TIMEOUT_ENV_VAR,
            value: raw.clone(),
        })?;
    }

    validate_config(config).map_err(ConfigError::Validation)
}
