//! Fixed-width record codec
//!
//! Every record occupies exactly [`RECORD_SIZE`] bytes on disk. The layout is
//! packed little-endian with no padding:
//!
//! ```text
//! [0..20]   processor_type      UTF-8, NUL-terminated, zero-padded
//! [20..28]  processor_frequency f64 (IEEE-754 binary64)
//! [28..32]  ram_capacity        i32
//! [32..36]  hdd_capacity        i32
//! [36..56]  monitor_type        UTF-8, NUL-terminated, zero-padded
//! ```

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::DecodeError;

/// Width of a text slot, terminator included
pub const TEXT_SLOT: usize = 20;

/// Maximum number of text bytes a slot holds
pub const TEXT_CAPACITY: usize = TEXT_SLOT - 1;

/// Byte width of one encoded record
pub const RECORD_SIZE: usize = 56;

const PROCESSOR_TYPE: usize = 0;
const PROCESSOR_FREQUENCY: usize = 20;
const RAM_CAPACITY: usize = 28;
const HDD_CAPACITY: usize = 32;
const MONITOR_TYPE: usize = 36;

/// Bounded text stored in a fixed slot.
///
/// Construction normalizes the input: it is cut at the first NUL and then
/// truncated to at most [`TEXT_CAPACITY`] bytes on a character boundary. A
/// `TextField` therefore always survives an encode/decode round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextField(String);

impl TextField {
    /// Create a text field, truncating input that does not fit
    pub fn new(text: &str) -> Self {
        let text = text.split('\0').next().unwrap_or_default();
        let mut end = text.len().min(TEXT_CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        TextField(text[..end].to_string())
    }

    /// Check whether `text` would be stored without truncation
    pub fn fits(text: &str) -> bool {
        text.len() <= TEXT_CAPACITY && !text.contains('\0')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn write_slot(&self, slot: &mut [u8]) {
        let bytes = self.0.as_bytes();
        slot[..bytes.len()].copy_from_slice(bytes);
        slot[bytes.len()..].fill(0);
    }

    fn read_slot(slot: &[u8], field: &'static str) -> Result<Self, DecodeError> {
        let end = slot
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::Unterminated { field })?;
        let text = std::str::from_utf8(&slot[..end])
            .map_err(|_| DecodeError::InvalidText { field })?;
        Ok(TextField(text.to_string()))
    }
}

impl From<&str> for TextField {
    fn from(text: &str) -> Self {
        TextField::new(text)
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One inventory entry
#[derive(Debug, Clone, PartialEq)]
pub struct Computer {
    /// Processor type
    pub processor_type: TextField,
    /// Processor clock frequency
    pub processor_frequency: f64,
    /// RAM size
    pub ram_capacity: i32,
    /// Disk size
    pub hdd_capacity: i32,
    /// Monitor type
    pub monitor_type: TextField,
}

impl Computer {
    /// Create a new record; text fields are truncated to their slot capacity
    pub fn new(
        processor_type: &str,
        processor_frequency: f64,
        ram_capacity: i32,
        hdd_capacity: i32,
        monitor_type: &str,
    ) -> Self {
        Computer {
            processor_type: TextField::new(processor_type),
            processor_frequency,
            ram_capacity,
            hdd_capacity,
            monitor_type: TextField::new(monitor_type),
        }
    }

    /// Serialize into the fixed on-disk layout
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        self.processor_type
            .write_slot(&mut buf[PROCESSOR_TYPE..PROCESSOR_TYPE + TEXT_SLOT]);
        LittleEndian::write_f64(
            &mut buf[PROCESSOR_FREQUENCY..RAM_CAPACITY],
            self.processor_frequency,
        );
        LittleEndian::write_i32(&mut buf[RAM_CAPACITY..HDD_CAPACITY], self.ram_capacity);
        LittleEndian::write_i32(&mut buf[HDD_CAPACITY..MONITOR_TYPE], self.hdd_capacity);
        self.monitor_type
            .write_slot(&mut buf[MONITOR_TYPE..MONITOR_TYPE + TEXT_SLOT]);
        buf
    }

    /// Parse a record from exactly [`RECORD_SIZE`] bytes
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() != RECORD_SIZE {
            return Err(DecodeError::Length {
                expected: RECORD_SIZE,
                actual: data.len(),
            });
        }

        Ok(Computer {
            processor_type: TextField::read_slot(
                &data[PROCESSOR_TYPE..PROCESSOR_TYPE + TEXT_SLOT],
                "processor_type",
            )?,
            processor_frequency: LittleEndian::read_f64(&data[PROCESSOR_FREQUENCY..RAM_CAPACITY]),
            ram_capacity: LittleEndian::read_i32(&data[RAM_CAPACITY..HDD_CAPACITY]),
            hdd_capacity: LittleEndian::read_i32(&data[HDD_CAPACITY..MONITOR_TYPE]),
            monitor_type: TextField::read_slot(
                &data[MONITOR_TYPE..MONITOR_TYPE + TEXT_SLOT],
                "monitor_type",
            )?,
        })
    }

    /// Case-sensitive substring match on the processor type.
    /// An empty term matches every record.
    pub fn processor_type_contains(&self, term: &str) -> bool {
        self.processor_type.as_str().contains(term)
    }
}
