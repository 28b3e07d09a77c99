//! Startup orchestration.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{apply_env_overrides, load_config, AdapterConfig, ConfigError};
use crate::observability::logging;

/// One-shot startup state owned by the hosting process.
#[derive(Debug, Default)]
pub struct Startup {
    notice_logged: AtomicBool,
}

impl Startup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve configuration: file (or defaults), then `ARWEAVE_*` overrides.
    pub fn load_config(&self, path: Option<&Path>) -> Result<AdapterConfig, ConfigError> {
        let mut config = match path {
            Some(path) => load_config(path)?,
            None => AdapterConfig::default(),
        };
        apply_env_overrides(&mut config)?;
        Ok(config)
    }

    /// Install logging at the configured level and emit the notice.
    pub fn init(&self, config: &AdapterConfig) {
        logging::init_logging(&config.observability.log_level);
        self.log_notice_once();
        tracing::info!(
            base_url = %config.gateway.base_url,
            graphql_url = %config.gateway.graphql_endpoint(),
            timeout_ms = config.gateway.timeout_ms,
            "Configuration loaded"
        );
    }

    /// Log the license notice the first time only. Returns whether it was logged.
    pub fn log_notice_once(&self) -> bool {
        if self.notice_logged.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            "arweave-gateway is MIT licensed and provided without warranty"
        );
        true
    }
}
