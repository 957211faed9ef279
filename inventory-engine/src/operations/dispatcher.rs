//! Command dispatcher - routes store commands to handlers
//!
//! This is the entry point front ends use. It binds the file store operations
//! to the database and results files of a [`StoreConfig`].

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::storage::record::Computer;
use crate::storage::sort::SortKey;
use crate::storage::store::StoreStat;

/// Commands a front end can issue
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a record to the database
    Add(Computer),
    /// Sort the database into the results file
    Sort(SortKey),
    /// Copy records whose processor type contains the term into the results file
    Search(String),
    /// List the database
    ShowDatabase,
    /// List the results file, then empty it
    ShowResults,
    /// Empty the database
    ClearDatabase,
    /// Empty the results file
    ClearResults,
    /// Report file sizes
    Stat,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Sort(SortKey::ProcessorFrequency) => "sort-frequency",
            Command::Sort(SortKey::ProcessorType) => "sort-type",
            Command::Search(_) => "search",
            Command::ShowDatabase => "show",
            Command::ShowResults => "show-results",
            Command::ClearDatabase => "clear",
            Command::ClearResults => "clear-results",
            Command::Stat => "stat",
        }
    }
}

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Record appended
    Appended,
    /// Number of records a search wrote to the results file
    Matched(usize),
    /// Number of records a sort wrote to the results file
    Sorted(usize),
    /// Records read from a store, in on-disk order
    Records(Vec<Computer>),
    /// The store read holds no records
    Empty,
    /// File emptied
    Cleared,
    /// Sizes of both files
    Stats {
        database: StoreStat,
        results: StoreStat,
    },
}

/// The inventory engine - binds commands to the configured store files
pub struct Engine {
    config: StoreConfig,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: StoreConfig) -> Self {
        Engine { config }
    }

    /// Database file path
    pub fn database_path(&self) -> PathBuf {
        self.config.database_path()
    }

    /// Results file path
    pub fn results_path(&self) -> PathBuf {
        self.config.results_path()
    }

    /// Create both store files if they are absent
    pub fn init(&self) -> StoreResult<()> {
        super::file_ops::init(self)
    }

    /// Execute a command
    pub fn execute(&self, command: Command) -> StoreResult<Outcome> {
        debug!("Executing {}", command.name());

        let name = command.name();
        let result = match command {
            Command::Add(record) => super::record_ops::add(self, &record),
            Command::Sort(key) => super::scan_ops::sort(self, key),
            Command::Search(term) => super::scan_ops::search(self, &term),
            Command::ShowDatabase => super::record_ops::show_database(self),
            Command::ShowResults => super::record_ops::show_results(self),
            Command::ClearDatabase => super::file_ops::clear_database(self),
            Command::ClearResults => super::file_ops::clear_results(self),
            Command::Stat => super::file_ops::stat(self),
        };

        if let Err(ref e) = result {
            warn!("{} failed: {}", name, e);
        }
        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::tempdir;

    fn engine(dir: &std::path::Path) -> Engine {
        let engine = Engine::new(StoreConfig::default().with_data_dir(dir));
        engine.init().unwrap();
        engine
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Sort(SortKey::ProcessorFrequency).name(), "sort-frequency");
        assert_eq!(Command::Sort(SortKey::ProcessorType).name(), "sort-type");
        assert_eq!(Command::ShowResults.name(), "show-results");
    }

    #[test]
    fn test_add_sort_show() {
        let dir = tempdir().unwrap();
        let engine = engine(dir.path());

        let intel = Computer::new("Intel", 3.2, 16, 512, "LED");
        let amd = Computer::new("AMD", 4.0, 32, 1024, "LCD");

        assert_eq!(engine.execute(Command::Add(amd.clone())).unwrap(), Outcome::Appended);
        assert_eq!(engine.execute(Command::Add(intel.clone())).unwrap(), Outcome::Appended);

        let sorted = engine
            .execute(Command::Sort(SortKey::ProcessorFrequency))
            .unwrap();
        assert_eq!(sorted, Outcome::Sorted(2));

        assert_eq!(
            engine.execute(Command::ShowResults).unwrap(),
            Outcome::Records(vec![intel.clone(), amd.clone()])
        );
        // Showing the results consumes them
        assert_eq!(engine.execute(Command::ShowResults).unwrap(), Outcome::Empty);

        assert_eq!(
            engine.execute(Command::ShowDatabase).unwrap(),
            Outcome::Records(vec![amd, intel])
        );
    }

    #[test]
    fn test_search_and_clear() {
        let dir = tempdir().unwrap();
        let engine = engine(dir.path());

        engine.execute(Command::Add(Computer::new("Intel", 3.2, 16, 512, "LED"))).unwrap();
        engine.execute(Command::Add(Computer::new("Intel Core", 2.4, 8, 256, "IPS"))).unwrap();

        assert_eq!(
            engine.execute(Command::Search("Core".to_string())).unwrap(),
            Outcome::Matched(1)
        );

        assert_eq!(engine.execute(Command::ClearResults).unwrap(), Outcome::Cleared);
        assert_eq!(engine.execute(Command::ShowResults).unwrap(), Outcome::Empty);

        assert_eq!(engine.execute(Command::ClearDatabase).unwrap(), Outcome::Cleared);
        assert_eq!(engine.execute(Command::ShowDatabase).unwrap(), Outcome::Empty);
    }

    #[test]
    fn test_show_results_keeps_corrupt_file() {
        let dir = tempdir().unwrap();
        let engine = engine(dir.path());

        std::fs::write(engine.results_path(), [7u8; 10]).unwrap();

        let err = engine.execute(Command::ShowResults).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptStore);
        assert_eq!(std::fs::read(engine.results_path()).unwrap().len(), 10);
    }

    #[test]
    fn test_stat() {
        let dir = tempdir().unwrap();
        let engine = engine(dir.path());

        engine.execute(Command::Add(Computer::new("Intel", 3.2, 16, 512, "LED"))).unwrap();

        match engine.execute(Command::Stat).unwrap() {
            Outcome::Stats { database, results } => {
                assert_eq!(database.records, 1);
                assert!(results.is_empty());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
