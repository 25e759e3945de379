//! Core configuration traits

use crate::CharterError;
use std::path::Path;
use tracing::debug;

/// Loading, merging and validating a configuration type
pub trait ConfigLoader: Clone + Default + Send + Sync + 'static {
    /// Load configuration from a TOML or JSON file, chosen by extension
    fn load_from_file(path: &Path) -> Result<Self, CharterError>;

    /// Apply overrides from `(name, value)` pairs shaped like environment
    /// variables
    fn merge_from_vars<I>(&mut self, vars: I) -> Result<(), CharterError>
    where
        I: IntoIterator<Item = (String, String)>;

    /// Apply overrides from the process environment
    fn merge_with_env(&mut self) -> Result<(), CharterError> {
        self.merge_from_vars(std::env::vars())
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), CharterError>;

    /// Load from `path` if given, then apply the environment and validate
    fn resolve(path: Option<&Path>) -> Result<Self, CharterError> {
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration file");
                Self::load_from_file(path)?
            }
            None => {
                debug!("no configuration file, using defaults");
                Self::default()
            }
        };
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }
}
