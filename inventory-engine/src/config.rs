//! Store file locations

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default database file name
pub const DATABASE_FILENAME: &str = "computers.dat";

/// Default search/sort results file name
pub const RESULTS_FILENAME: &str = "search_results.dat";

/// Where the database and results files live
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory relative file names resolve against
    pub data_dir: PathBuf,
    /// Database file
    pub database_file: PathBuf,
    /// Results file written by search and sort
    pub results_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: PathBuf::from("."),
            database_file: PathBuf::from(DATABASE_FILENAME),
            results_file: PathBuf::from(RESULTS_FILENAME),
        }
    }
}

impl StoreConfig {
    /// Replace the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Resolved path of the database file
    pub fn database_path(&self) -> PathBuf {
        self.resolve_path(&self.database_file)
    }

    /// Resolved path of the results file
    pub fn results_path(&self) -> PathBuf {
        self.resolve_path(&self.results_file)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}
