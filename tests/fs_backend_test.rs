use absensi::model::{parse_date, AttendanceRecord, AttendanceStatus, Student};
use absensi::store::backend::{StorageBackend, StoreKey};
use absensi::store::fs::FileStore;
use absensi::store::fs_backend::FsBackend;
use absensi::store::{DataStore, SeedPolicy};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn student(id: &str, nama: &str) -> Student {
    Student {
        id: id.into(),
        nomor: format!("10{}", id),
        nama: nama.into(),
        kelas: "10A".into(),
    }
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read(StoreKey::Students).unwrap(), None);

    backend.write(StoreKey::Students, "[]").unwrap();
    assert_eq!(
        backend.read(StoreKey::Students).unwrap(),
        Some("[]".to_string())
    );
    assert_eq!(backend.read(StoreKey::AttendanceRecords).unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write(StoreKey::AttendanceRecords, "[1]").unwrap();
    backend.write(StoreKey::AttendanceRecords, "[2]").unwrap();

    let expected_path = dir.path().join("attendanceRecords.json");
    assert_eq!(backend.location(StoreKey::AttendanceRecords), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[2]");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("a").join("b");
    let backend = FsBackend::new(root.clone());

    backend.write(StoreKey::Students, "[]").unwrap();
    assert!(root.join("students.json").exists());
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let ani = student("a", "Ani");
    let date = parse_date("2024-03-10").unwrap();

    {
        let mut store = FileStore::open_dir(dir.path().to_path_buf(), SeedPolicy::Empty);
        store.insert_students(vec![ani.clone(), student("b", "Bayu")]);
        store.replace_records(vec![AttendanceRecord::snapshot(
            &ani,
            date,
            AttendanceStatus::Hadir,
        )]);
        assert!(store.take_faults().is_empty());
    }

    let mut reopened = FileStore::open_dir(dir.path().to_path_buf(), SeedPolicy::SeedRoster);
    assert!(reopened.take_faults().is_empty());
    assert_eq!(reopened.data_dir(), dir.path());
    assert_eq!(reopened.students().len(), 2);
    assert_eq!(reopened.records().len(), 1);
    assert_eq!(reopened.records()[0].student_name, "Ani");
    assert_eq!(reopened.records()[0].date, date);
}

#[test]
fn test_file_store_seeds_fresh_directory() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open_dir(dir.path().to_path_buf(), SeedPolicy::SeedRoster);

    assert_eq!(store.students().len(), 8);
    assert_eq!(store.students()[0].nama, "Budi Santoso");
    // nothing is written until the first mutation
    assert!(!dir.path().join("students.json").exists());
}

#[test]
fn test_file_store_malformed_file_falls_back() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("students.json"), "not json").unwrap();
    fs::write(
        dir.path().join("attendanceRecords.json"),
        r#"[{"studentId":"1","studentName":"Budi Santoso","kelas":"10A","date":"2024-03-10","status":"Hadir"}]"#,
    )
    .unwrap();

    let mut store = FileStore::open_dir(dir.path().to_path_buf(), SeedPolicy::Empty);

    assert!(store.students().is_empty());
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].status, AttendanceStatus::Hadir);
    assert_eq!(store.take_faults().len(), 1);
}
