//! Store error kinds and error handling
//!
//! Every failure the engine can report falls into one of a small number of
//! kinds. Each kind carries a stable numeric code so front ends can turn it
//! into a process exit status without matching on error internals.

use std::path::PathBuf;

use thiserror::Error;

/// Error kinds - the numeric values are stable and used as exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
    /// File could not be opened, read or written
    Io = 2,
    /// A byte chunk is not a valid encoded record
    Decode = 3,
    /// A scan hit a malformed record (trailing partial record included)
    CorruptStore = 4,
    /// Configuration could not be loaded
    Config = 5,
}

impl ErrorKind {
    /// Get the raw code value
    pub fn as_raw(&self) -> u8 {
        *self as u8
    }

    /// Check if this kind means the store file itself is damaged
    pub fn is_corruption(&self) -> bool {
        matches!(self, ErrorKind::Decode | ErrorKind::CorruptStore)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_raw(), match self {
            ErrorKind::Io => "I/O error",
            ErrorKind::Decode => "Decode error",
            ErrorKind::CorruptStore => "Corrupt store",
            ErrorKind::Config => "Configuration error",
        })
    }
}

/// Reasons a byte chunk fails to decode into a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("record chunk is {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },

    #[error("text field `{field}` has no terminator")]
    Unterminated { field: &'static str },

    #[error("text field `{field}` is not valid UTF-8")]
    InvalidText { field: &'static str },
}

/// Main error type for the inventory engine
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Corrupt store {}: record at byte {offset}: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        offset: u64,
        source: DecodeError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Io(_) => ErrorKind::Io,
            StoreError::Decode(_) => ErrorKind::Decode,
            StoreError::CorruptStore { .. } => ErrorKind::CorruptStore,
            StoreError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        assert_eq!(ErrorKind::Io.as_raw(), 2);
        assert_eq!(ErrorKind::Decode.as_raw(), 3);
        assert_eq!(ErrorKind::CorruptStore.as_raw(), 4);
        assert_eq!(ErrorKind::Config.as_raw(), 5);
        assert_eq!(ErrorKind::CorruptStore.to_string(), "4 (Corrupt store)");
    }

    #[test]
    fn test_corruption_check() {
        assert!(ErrorKind::CorruptStore.is_corruption());
        assert!(ErrorKind::Decode.is_corruption());
        assert!(!ErrorKind::Io.is_corruption());
    }

    #[test]
    fn test_kind_mapping() {
        let io = StoreError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.kind(), ErrorKind::Io);

        let corrupt = StoreError::CorruptStore {
            path: PathBuf::from("computers.dat"),
            offset: 56,
            source: DecodeError::Length { expected: 56, actual: 3 },
        };
        assert_eq!(corrupt.kind(), ErrorKind::CorruptStore);
        assert!(corrupt.to_string().contains("byte 56"));
    }
}
