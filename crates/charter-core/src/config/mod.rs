//! Charter configuration
//!
//! Configuration is read from a TOML or JSON file and then overridden by
//! `CHARTER_*` variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `CHARTER_MODULE_NAME` | `module_name` |
//! | `CHARTER_STORAGE_NAMESPACE` | `storage_namespace` |
//! | `CHARTER_LOG_FILTER` | `logging.filter` |
//! | `CHARTER_LOG_ANSI` | `logging.ansi` |

mod traits;

pub use traits::ConfigLoader;

use crate::CharterError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default module name reported by the hook
pub const DEFAULT_MODULE_NAME: &str = "WHITELIST_LICENSING_HOOK";
/// Default prefix for storage keys
pub const DEFAULT_STORAGE_NAMESPACE: &str = "charter";

const ENV_PREFIX: &str = "CHARTER_";

/// Tracing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit ANSI colour codes
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: false,
        }
    }
}

/// Licensing hook configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharterConfig {
    /// Name the hook reports to the host
    pub module_name: String,
    /// Prefix under which registry keys are stored
    pub storage_namespace: String,
    /// Tracing settings
    pub logging: LoggingConfig,
}

impl Default for CharterConfig {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ConfigLoader for CharterConfig {
    fn load_from_file(path: &Path) -> Result<Self, CharterError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CharterError::invalid(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| CharterError::invalid(format!("Invalid JSON: {e}"))),
            _ => Err(CharterError::invalid("Unsupported config file format")),
        }
    }

    fn merge_from_vars<I>(&mut self, vars: I) -> Result<(), CharterError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name {
                "MODULE_NAME" => self.module_name = value,
                "STORAGE_NAMESPACE" => self.storage_namespace = value,
                "LOG_FILTER" => self.logging.filter = value,
                "LOG_ANSI" => {
                    self.logging.ansi = value.parse().map_err(|_| {
                        CharterError::invalid(format!("Invalid boolean in {key}: {value}"))
                    })?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), CharterError> {
        if self.module_name.trim().is_empty() {
            return Err(CharterError::invalid("module_name must not be empty"));
        }
        if self.storage_namespace.is_empty() {
            return Err(CharterError::invalid("storage_namespace must not be empty"));
        }
        if self.storage_namespace.contains('/') {
            return Err(CharterError::invalid(format!(
                "storage_namespace must not contain '/': {}",
                self.storage_namespace
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(CharterError::invalid("logging.filter must not be empty"));
        }
        Ok(())
    }
}
