//! Inventory Engine - flat-file store of fixed-width computer records
//!
//! This crate provides the record codec and the file store operations, plus a
//! dispatcher binding them to a configured pair of store files.

pub mod config;
pub mod error;
pub mod storage;
pub mod operations;

pub use config::StoreConfig;
pub use error::{DecodeError, ErrorKind, StoreError, StoreResult};
