use super::backend::{StorageBackend, StoreKey};
use super::{DataStore, RemovedStudent};
use crate::error::{AbsensiError, Result};
use crate::model::{seed_roster, AttendanceRecord, Student};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// What to use for the student collection when nothing usable was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    SeedRoster,
    Empty,
}

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    students: Vec<Student>,
    records: Vec<AttendanceRecord>,
    faults: Vec<AbsensiError>,
    /// The roster came from the seed and has not been written yet.
    unsaved_seed: bool,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Load both collections from `backend`, falling back to defaults per key.
    pub fn open(backend: B, seed: SeedPolicy) -> Self {
        let mut faults = Vec::new();

        let saved_students = load_collection(&backend, StoreKey::Students, &mut faults);
        let unsaved_seed = saved_students.is_none() && seed == SeedPolicy::SeedRoster;
        let students = saved_students.unwrap_or_else(|| match seed {
            SeedPolicy::SeedRoster => seed_roster(),
            SeedPolicy::Empty => Vec::new(),
        });
        let mut records = dedup_records(
            load_collection(&backend, StoreKey::AttendanceRecords, &mut faults)
                .unwrap_or_default(),
        );
        records.sort_by_key(|r| r.date);

        debug!(
            students = students.len(),
            records = records.len(),
            "record store opened"
        );

        Self {
            backend,
            students,
            records,
            faults,
            unsaved_seed,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn persist_students(&mut self) {
        match write_collection(&self.backend, StoreKey::Students, &self.students) {
            Ok(()) => self.unsaved_seed = false,
            Err(e) => self.faults.push(e),
        }
    }

    /// Records refer to students by id, so a seeded roster is written out
    /// together with the first records that may point at it.
    fn persist_records(&mut self) {
        if self.unsaved_seed {
            self.persist_students();
        }
        if let Err(e) = write_collection(&self.backend, StoreKey::AttendanceRecords, &self.records)
        {
            self.faults.push(e);
        }
    }
}

fn load_collection<B: StorageBackend, T: DeserializeOwned>(
    backend: &B,
    key: StoreKey,
    faults: &mut Vec<AbsensiError>,
) -> Option<Vec<T>> {
    match backend.read(key) {
        Ok(None) => {
            debug!(%key, "nothing saved, using defaults");
            None
        }
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(e) => {
                warn!(%key, error = %e, "saved data is malformed, using defaults");
                faults.push(AbsensiError::InvalidFormat(format!(
                    "saved {} data is malformed ({}); using defaults",
                    key, e
                )));
                None
            }
        },
        Err(e) => {
            warn!(%key, error = %e, "could not read saved data, using defaults");
            faults.push(e);
            None
        }
    }
}

/// Keeps the last record for each (student, date) pair, in load order.
fn dedup_records(records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    let total = records.len();
    let mut seen = HashSet::new();
    let mut kept: Vec<AttendanceRecord> = records
        .into_iter()
        .rev()
        .filter(|r| seen.insert((r.student_id.clone(), r.date)))
        .collect();
    kept.reverse();

    if kept.len() < total {
        warn!(
            dropped = total - kept.len(),
            "saved attendance has duplicate (student, date) entries, keeping the last of each"
        );
    }
    kept
}

fn write_collection<B: StorageBackend, T: Serialize>(
    backend: &B,
    key: StoreKey,
    items: &[T],
) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    match backend.write(key, &raw) {
        Ok(()) => {
            debug!(
                %key,
                items = items.len(),
                location = %backend.location(key).display(),
                "persisted"
            );
            Ok(())
        }
        Err(e) => {
            warn!(%key, error = %e, "write failed, keeping in-memory state");
            Err(e)
        }
    }
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn students(&self) -> &[Student] {
        &self.students
    }

    fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    fn insert_students(&mut self, students: Vec<Student>) {
        if students.is_empty() {
            return;
        }
        self.students.extend(students);
        self.persist_students();
    }

    fn remove_student(&mut self, id: &str) -> Result<RemovedStudent> {
        let pos = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AbsensiError::StudentNotFound(id.to_string()))?;
        let student = self.students.remove(pos);

        let before = self.records.len();
        self.records.retain(|r| r.student_id != id);
        let removed_records = before - self.records.len();

        self.persist_students();
        self.persist_records();

        Ok(RemovedStudent {
            student,
            removed_records,
        })
    }

    fn replace_records(&mut self, mut records: Vec<AttendanceRecord>) {
        records.sort_by_key(|r| r.date);
        self.records = records;
        self.persist_records();
    }

    fn take_faults(&mut self) -> Vec<AbsensiError> {
        std::mem::take(&mut self.faults)
    }
}
