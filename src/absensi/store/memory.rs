use super::mem_backend::MemBackend;
use super::record_store::{RecordStore, SeedPolicy};

/// In-memory store for testing and development.
/// Does NOT persist data beyond the process. Starts with an empty roster.
pub type InMemoryStore = RecordStore<MemBackend>;

impl RecordStore<MemBackend> {
    pub fn new() -> Self {
        RecordStore::open(MemBackend::new(), SeedPolicy::Empty)
    }
}

impl Default for RecordStore<MemBackend> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{parse_date, AttendanceRecord, AttendanceStatus, Student};
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a student with a fixed id, so tests can refer to it.
        pub fn with_student(mut self, id: &str, nama: &str, kelas: &str) -> Self {
            let nomor = (1001 + self.store.students().len()).to_string();
            self.store.insert_students(vec![Student {
                id: id.to_string(),
                nomor,
                nama: nama.to_string(),
                kelas: kelas.to_string(),
            }]);
            self
        }

        /// Adds a record for an existing student, snapshotting its current name and class.
        pub fn with_record(mut self, student_id: &str, date: &str, status: AttendanceStatus) -> Self {
            let student = self
                .store
                .students()
                .iter()
                .find(|s| s.id == student_id)
                .cloned()
                .expect("fixture student must exist");
            let mut records = self.store.records().to_vec();
            records.push(AttendanceRecord::snapshot(
                &student,
                parse_date(date).expect("fixture date must be valid"),
                status,
            ));
            self.store.replace_records(records);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
