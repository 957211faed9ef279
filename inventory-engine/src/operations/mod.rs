//! Store command handlers
//!
//! One handler per command of the front end. Each binds a file store
//! operation to the configured database and results files.

pub mod dispatcher;
pub mod file_ops;
pub mod record_ops;
pub mod scan_ops;

pub use dispatcher::{Command, Engine, Outcome};
