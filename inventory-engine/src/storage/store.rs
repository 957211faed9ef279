//! Flat-file store of fixed-width records
//!
//! A store is a file holding encoded records back to back, with no header,
//! footer or length prefix. Every operation takes the path explicitly and
//! opens the file for the duration of the call only.
//!
//! Scans (`search`, `sort_by`, `dump`) treat a file whose length is not a
//! multiple of [`RECORD_SIZE`] as corrupt and fail at the first malformed
//! chunk. Output files are only written once the scan has completed, so a
//! failed scan never leaves a half-written result behind, and sorting a store
//! onto itself is safe.
//!
//! There is no locking. Concurrent callers on the same path can interleave
//! bytes; callers must serialize access themselves.

use std::cmp::Ordering;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use bytes::{BufMut, BytesMut};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

use super::record::{Computer, RECORD_SIZE};
use super::sort::SortKey;

/// Size information about a store file, taken from metadata alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStat {
    /// File length in bytes
    pub bytes: u64,
    /// Number of whole records
    pub records: u64,
    /// Bytes past the last whole record (non-zero means corrupt)
    pub trailing_bytes: u64,
}

impl StoreStat {
    fn from_len(bytes: u64) -> Self {
        StoreStat {
            bytes,
            records: bytes / RECORD_SIZE as u64,
            trailing_bytes: bytes % RECORD_SIZE as u64,
        }
    }

    /// Check that the file is a whole number of records
    pub fn is_valid(&self) -> bool {
        self.trailing_bytes == 0
    }

    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }
}

/// Lazy reader over the records of a store, in on-disk order.
///
/// Yields `CorruptStore` once for the first malformed chunk and then ends.
pub struct Records {
    path: PathBuf,
    reader: BufReader<File>,
    offset: u64,
    done: bool,
}

impl Records {
    /// Open a store for scanning
    pub fn open(path: &Path) -> StoreResult<Self> {
        let file = File::open(path)?;
        Ok(Records {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            offset: 0,
            done: false,
        })
    }
}

impl Iterator for Records {
    type Item = StoreResult<Computer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = [0u8; RECORD_SIZE];
        let filled = match read_chunk(&mut self.reader, &mut chunk) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(StoreError::Io(e)));
            }
        };

        if filled == 0 {
            self.done = true;
            return None;
        }

        let offset = self.offset;
        self.offset += filled as u64;

        match Computer::decode(&chunk[..filled]) {
            Ok(record) => Some(Ok(record)),
            Err(source) => {
                self.done = true;
                warn!("Malformed record in {:?} at byte {}: {}", self.path, offset, source);
                Some(Err(StoreError::CorruptStore {
                    path: self.path.clone(),
                    offset,
                    source,
                }))
            }
        }
    }
}

/// Read up to `buf.len()` bytes, stopping early only at end of file
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Result of dumping a store
pub enum Dump {
    /// The store holds no records
    Empty,
    /// Records in on-disk order
    Records(Records),
}

impl Dump {
    pub fn is_empty(&self) -> bool {
        matches!(self, Dump::Empty)
    }

    /// Drain into a vector, failing on the first malformed record
    pub fn into_vec(self) -> StoreResult<Vec<Computer>> {
        match self {
            Dump::Empty => Ok(Vec::new()),
            Dump::Records(records) => records.collect(),
        }
    }
}

/// Check whether `path` names a readable file
pub fn exists(path: &Path) -> bool {
    File::open(path)
        .and_then(|f| f.metadata())
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Create an empty store if none exists; an existing file is left untouched
pub fn create_empty(path: &Path) -> StoreResult<()> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)?;
    debug!("Store ready: {:?}", path);
    Ok(())
}

/// Append one record at the end of the store, creating it if absent.
///
/// The record is written with a single write and synced before returning. A
/// failure mid-write (disk full) leaves a trailing partial record which later
/// scans report as corruption.
pub fn append(path: &Path, record: &Computer) -> StoreResult<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    file.write_all(&record.encode())?;
    file.flush()?;
    file.sync_all()?;

    debug!("Appended record ({}) to {:?}", record.processor_type, path);
    Ok(())
}

/// Write every record of `path` matching `predicate` to `output`.
///
/// `output` is replaced with exactly the matches, in on-disk order, once the
/// scan has succeeded. Returns the number of matches.
pub fn search<P>(path: &Path, output: &Path, mut predicate: P) -> StoreResult<usize>
where
    P: FnMut(&Computer) -> bool,
{
    let mut matches = BytesMut::new();
    let mut count = 0;

    for record in Records::open(path)? {
        let record = record?;
        if predicate(&record) {
            matches.put_slice(&record.encode());
            count += 1;
        }
    }

    replace_contents(output, &matches)?;

    debug!("Search of {:?} matched {} records into {:?}", path, count, output);
    Ok(count)
}

/// Search by case-sensitive substring of the processor type.
/// An empty term matches every record.
pub fn search_processor_type(path: &Path, output: &Path, term: &str) -> StoreResult<usize> {
    search(path, output, |record| record.processor_type_contains(term))
}

/// Stable-sort the records of `path` with `compare` and write them to `output`.
///
/// The whole store is read before `output` is touched, so `output` may be the
/// same path as the input. Returns the number of records written.
pub fn sort_by<F>(path: &Path, output: &Path, mut compare: F) -> StoreResult<usize>
where
    F: FnMut(&Computer, &Computer) -> Ordering,
{
    let mut records = Records::open(path)?.collect::<StoreResult<Vec<_>>>()?;

    // slice::sort_by is stable
    records.sort_by(|a, b| compare(a, b));

    let mut buf = BytesMut::with_capacity(records.len() * RECORD_SIZE);
    for record in &records {
        buf.put_slice(&record.encode());
    }
    replace_contents(output, &buf)?;

    debug!("Sorted {} records from {:?} into {:?}", records.len(), path, output);
    Ok(records.len())
}

/// Sort on one of the predefined keys
pub fn sort_by_key(path: &Path, output: &Path, key: SortKey) -> StoreResult<usize> {
    debug!("Sorting {:?} by {}", path, key.name());
    sort_by(path, output, |a, b| key.compare(a, b))
}

/// Open a store for display. Re-opens the file on every call.
pub fn dump(path: &Path) -> StoreResult<Dump> {
    let records = Records::open(path)?;
    let len = records.reader.get_ref().metadata()?.len();

    if len == 0 {
        return Ok(Dump::Empty);
    }
    Ok(Dump::Records(records))
}

/// Empty the store, creating it if absent
pub fn truncate(path: &Path) -> StoreResult<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.sync_all()?;

    debug!("Truncated {:?}", path);
    Ok(())
}

/// Size information without decoding any record
pub fn stat(path: &Path) -> StoreResult<StoreStat> {
    let len = std::fs::metadata(path)?.len();
    let stat = StoreStat::from_len(len);
    if !stat.is_valid() {
        warn!("{:?} has {} trailing bytes past the last record", path, stat.trailing_bytes);
    }
    Ok(stat)
}

/// Replace the whole contents of `path` in one write
fn replace_contents(path: &Path, data: &[u8]) -> StoreResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(data)?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
