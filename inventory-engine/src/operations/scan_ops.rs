//! Scan operations: Search, Sort
//!
//! Both read the database and replace the results file.

use tracing::info;

use crate::error::StoreResult;
use crate::storage::sort::SortKey;
use crate::storage::store;

use super::dispatcher::{Engine, Outcome};

/// Copy records whose processor type contains `term` into the results file
pub fn search(engine: &Engine, term: &str) -> StoreResult<Outcome> {
    let count = store::search_processor_type(&engine.database_path(), &engine.results_path(), term)?;
    info!("Search for {:?} matched {} records", term, count);
    Ok(Outcome::Matched(count))
}

/// Sort the database into the results file
pub fn sort(engine: &Engine, key: SortKey) -> StoreResult<Outcome> {
    let count = store::sort_by_key(&engine.database_path(), &engine.results_path(), key)?;
    info!("Sorted {} records by {}", count, key.name());
    Ok(Outcome::Sorted(count))
}
