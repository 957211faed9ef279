//! Record operations: Add, Show

use std::path::Path;

use crate::error::StoreResult;
use crate::storage::record::Computer;
use crate::storage::store::{self, Dump};

use super::dispatcher::{Engine, Outcome};

/// Append a record to the database
pub fn add(engine: &Engine, record: &Computer) -> StoreResult<Outcome> {
    store::append(&engine.database_path(), record)?;
    Ok(Outcome::Appended)
}

/// Read every record of the database
pub fn show_database(engine: &Engine) -> StoreResult<Outcome> {
    read_store(&engine.database_path())
}

/// Read every record of the results file, then empty it.
///
/// The file is only emptied after it was read successfully.
pub fn show_results(engine: &Engine) -> StoreResult<Outcome> {
    let path = engine.results_path();
    let outcome = read_store(&path)?;
    store::truncate(&path)?;
    Ok(outcome)
}

fn read_store(path: &Path) -> StoreResult<Outcome> {
    match store::dump(path)? {
        Dump::Empty => Ok(Outcome::Empty),
        dump => Ok(Outcome::Records(dump.into_vec()?)),
    }
}
