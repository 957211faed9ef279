//! Storage layer for the inventory store
//!
//! This module handles the binary format of store files:
//! - Record encoding (fixed-width layout)
//! - Sort keys
//! - Store file operations (append, scan, sort, truncate)

pub mod record;
pub mod sort;
pub mod store;

pub use record::{Computer, TextField, RECORD_SIZE, TEXT_CAPACITY};
pub use sort::SortKey;
pub use store::{Dump, Records, StoreStat};
