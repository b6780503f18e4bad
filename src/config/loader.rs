//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate
//! parameters from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RatesConfig;

/// Loads and provides access to the engine rate configuration.
///
/// The `ConfigLoader` reads a single YAML file holding the payroll defaults,
/// employer loadings, and work schedule. Any section left out of the file
/// falls back to the canonical defaults.
///
/// # Example
///
/// ```no_run
/// use quote_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
/// println!("Employer loading: {}%", loader.rates().employer.total());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RatesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rates file (e.g., "./config/rates.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the file
    /// is missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RatesConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader carrying the compiled-in default rates.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns the loaded rate configuration.
    pub fn rates(&self) -> &RatesConfig {
        &self.config
    }
}
