//! File operations: Init, Clear, Stat

use tracing::info;

use crate::error::StoreResult;
use crate::storage::store;

use super::dispatcher::{Engine, Outcome};

/// Create the database and results files if absent
pub fn init(engine: &Engine) -> StoreResult<()> {
    for path in [engine.database_path(), engine.results_path()] {
        if !store::exists(&path) {
            store::create_empty(&path)?;
            info!("Created store file {:?}", path);
        }
    }
    Ok(())
}

/// Empty the database file
pub fn clear_database(engine: &Engine) -> StoreResult<Outcome> {
    store::truncate(&engine.database_path())?;
    Ok(Outcome::Cleared)
}

/// Empty the results file
pub fn clear_results(engine: &Engine) -> StoreResult<Outcome> {
    store::truncate(&engine.results_path())?;
    Ok(Outcome::Cleared)
}

/// Sizes of both files
pub fn stat(engine: &Engine) -> StoreResult<Outcome> {
    Ok(Outcome::Stats {
        database: store::stat(&engine.database_path())?,
        results: store::stat(&engine.results_path())?,
    })
}
