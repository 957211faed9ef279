//! Configuration file loading

use std::fs;
use std::path::Path;

use serde::Deserialize;

use inventory_engine::{StoreConfig, StoreError, StoreResult};

/// Contents of the TOML configuration file
///
/// ```toml
/// log_level = "info"
///
/// [store]
/// data_dir = "/var/lib/inventory"
/// database_file = "computers.dat"
/// results_file = "search_results.dat"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Log level used when `--log-level` is not given
    pub log_level: Option<String>,
    /// Store file locations
    pub store: StoreConfig,
}

impl ConfigFile {
    /// Read and parse a configuration file
    pub fn load(path: &Path) -> StoreResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration text
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
