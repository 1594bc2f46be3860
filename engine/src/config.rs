//! Dispatcher configuration.
//!
//! Configures the dispatcher itself (help header, default catalog format),
//! never the parameters of dispatched commands.
//!
//! # Example YAML
//!
//! ```yaml
//! description: Build helper for the release pipeline
//! catalog_format: markdown
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::CatalogFormat;

/// Errors loading or saving a [`DispatchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Top-level dispatcher configuration.
///
/// Every field is optional in YAML; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use command_dispatch_engine::{CatalogFormat, DispatchConfig};
///
/// let config = DispatchConfig::from_yaml_str("description: Demo tool\n").unwrap();
/// assert_eq!(config.description.as_deref(), Some("Demo tool"));
/// assert_eq!(config.catalog_format, CatalogFormat::Text);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Header of registry-wide help.
    pub description: Option<String>,
    /// Format used when the catalog is printed without an explicit format.
    pub catalog_format: CatalogFormat,
}

impl DispatchConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read, or
    /// [`ConfigError::YamlError`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
