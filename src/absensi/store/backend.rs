use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// The two independent collections kept in the key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Students,
    AttendanceRecords,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Students => "students",
            StoreKey::AttendanceRecords => "attendanceRecords",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `RecordStore` handles the "what" (collections, fallbacks, cascades).
///
/// Values are opaque strings; the record store owns the JSON encoding.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only when the backend itself fails.
    fn read(&self, key: StoreKey) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic: a reader sees either the old or the new value, never a mix.
    fn write(&self, key: StoreKey, value: &str) -> Result<()>;

    /// Where the value for `key` lives. A real path for `FsBackend`, a virtual
    /// one for `MemBackend`.
    fn location(&self, key: StoreKey) -> PathBuf;
}
