//! Calculator configuration.
//!
//! Settings come from an optional TOML file. Every key has a default,
//! so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! catalog = "data/reagents.json"
//! container = "crystal"
//! log_filter = "alchemy_calc=debug"
//! ```

use crate::container::ContainerKind;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the reagent catalog.
pub const DEFAULT_CATALOG: &str = "reagents.json";

/// Default tracing filter when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "alchemy_calc=info";

/// Settings for a calculator session.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::{AlchemyConfig, ContainerKind};
///
/// let config = AlchemyConfig::from_toml_str("container = \"crystal\"").unwrap();
/// assert_eq!(config.container, ContainerKind::Crystal);
/// assert_eq!(config.catalog.to_str(), Some("reagents.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlchemyConfig {
    /// Path to the JSON reagent catalog.
    pub catalog: PathBuf,

    /// Container used when none is given on the command line.
    pub container: ContainerKind,

    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for AlchemyConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            container: ContainerKind::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AlchemyConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}
