//! # Storage Layer
//!
//! This module defines the storage abstraction for absensi. The [`DataStore`] trait
//! is what every command operates on; [`record_store::RecordStore`] is its only
//! implementation, generic over a raw [`backend::StorageBackend`].
//!
//! ## Two Layers
//!
//! 1. **Backend**: a key-value store of opaque strings. Two keys, one per
//!    collection (see [`backend::StoreKey`]).
//! 2. **Record store**: the authoritative in-memory collections. Loaded once on
//!    open, written through to the backend after every mutation.
//!
//! ## Write-Through
//!
//! Every mutation replaces a whole collection in memory and then serializes the
//! whole collection to its key. There is no batching and no transaction across the
//! two keys. If the backend write fails, the in-memory state stays applied and the
//! failure is queued as a fault; commands drain faults into warning messages.
//!
//! ## Load Fallbacks
//!
//! On open, a key that is absent, unreadable or malformed falls back to a default:
//! - `students`: the seed roster (or empty, depending on [`SeedPolicy`])
//! - `attendanceRecords`: empty
//!
//! Opening a store never fails.
//!
//! ## Referential Integrity
//!
//! Records point at students by id only. [`DataStore::remove_student`] removes the
//! student's records in the same call; nothing else enforces it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `RecordStore<FsBackend>`, JSON documents on disk.
//! - [`memory::InMemoryStore`]: `RecordStore<MemBackend>`, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── students.json            # [{id, nomor, nama, kelas}, ...]
//! ├── attendanceRecords.json   # [{studentId, studentName, kelas, date, status}, ...]
//! └── config.json              # Configuration
//! ```

use crate::error::{AbsensiError, Result};
use crate::model::{AttendanceRecord, Student};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

pub use record_store::{RecordStore, SeedPolicy};

/// Result of removing a student.
#[derive(Debug, Clone)]
pub struct RemovedStudent {
    pub student: Student,
    pub removed_records: usize,
}

/// Abstract interface for the student and attendance collections.
pub trait DataStore {
    /// All students, in insertion order.
    fn students(&self) -> &[Student];

    /// All attendance records, ascending by date.
    fn records(&self) -> &[AttendanceRecord];

    /// Append students. Ids must already be assigned.
    fn insert_students(&mut self, students: Vec<Student>);

    /// Remove a student by id together with every record that references it.
    fn remove_student(&mut self, id: &str) -> Result<RemovedStudent>;

    /// Replace the whole record collection.
    fn replace_records(&mut self, records: Vec<AttendanceRecord>);

    /// Drain storage faults collected since the last call (failed loads and writes).
    fn take_faults(&mut self) -> Vec<AbsensiError>;
}
