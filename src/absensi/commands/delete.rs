use crate::commands::helpers::{drain_faults, resolve_student};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, selector: &str) -> Result<CmdResult> {
    let id = resolve_student(store, selector)?.id.clone();
    let removed = store.remove_student(&id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student deleted: {} ({} attendance record(s) removed)",
        removed.student.nama, removed.removed_records
    )));
    drain_faults(store, &mut result);
    Ok(result.with_affected_students(vec![removed.student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbsensiError;
    use crate::model::AttendanceStatus;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn cascades_to_records() {
        let mut store = StoreFixture::new()
            .with_student("1", "Ani", "10A")
            .with_student("2", "Bayu", "10A")
            .with_record("1", "2024-03-10", AttendanceStatus::Hadir)
            .with_record("2", "2024-03-10", AttendanceStatus::Sakit)
            .with_record("1", "2024-03-11", AttendanceStatus::Izin)
            .build();

        let result = run(&mut store, "1").unwrap();

        assert_eq!(result.affected_students[0].nama, "Ani");
        assert!(result.messages[0].content.contains("2 attendance record(s)"));
        assert_eq!(store.students().len(), 1);
        assert!(store.records().iter().all(|r| r.student_id == "2"));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn deletes_by_nomor() {
        let mut store = StoreFixture::new()
            .with_student("1", "Ani", "10A")
            .with_student("2", "Bayu", "10A")
            .build();

        run(&mut store, "1002").unwrap();
        assert_eq!(store.students()[0].nama, "Ani");
        assert_eq!(store.students().len(), 1);
    }

    #[test]
    fn unknown_selector_changes_nothing() {
        let mut store = StoreFixture::new().with_student("1", "Ani", "10A").build();
        assert!(matches!(
            run(&mut store, "99"),
            Err(AbsensiError::StudentNotFound(_))
        ));
        assert_eq!(store.students().len(), 1);
    }
}
