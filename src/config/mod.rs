//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, ARWEAVE_* env overrides)
//!     → validation.rs (semantic checks)
//!     → AdapterConfig (validated, immutable)
//!     → GatewayConfig cloned into each GatewayTransport
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Credentials and endpoints are resolved here; the gateway layer only
//!   receives finished values

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, ConfigError};
pub use schema::AdapterConfig;
pub use schema::GatewayConfig;
pub use schema::ObservabilityConfig;
