use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbsensiError, Result};
use crate::model::Student;
use crate::store::DataStore;

/// Finds a student by exact id, falling back to the roll number.
/// A roll number shared by several students is rejected rather than guessed.
pub fn resolve_student<'a, S: DataStore>(store: &'a S, selector: &str) -> Result<&'a Student> {
    let selector = selector.trim();
    if let Some(student) = store.students().iter().find(|s| s.id == selector) {
        return Ok(student);
    }

    let by_nomor: Vec<&Student> = store
        .students()
        .iter()
        .filter(|s| s.nomor == selector)
        .collect();
    match by_nomor.as_slice() {
        [one] => Ok(*one),
        [] => Err(AbsensiError::StudentNotFound(selector.to_string())),
        many => Err(AbsensiError::InvalidInput(format!(
            "Roll number {} is shared by {} students; use the student id",
            selector,
            many.len()
        ))),
    }
}

pub fn resolve_students<S: DataStore>(store: &S, selectors: &[String]) -> Result<Vec<Student>> {
    selectors
        .iter()
        .map(|sel| resolve_student(store, sel).cloned())
        .collect()
}

/// Moves queued storage faults into `result` as warnings.
pub fn drain_faults<S: DataStore>(store: &mut S, result: &mut CmdResult) {
    for fault in store.take_faults() {
        let content = match fault {
            AbsensiError::StorageUnavailable(_) => {
                format!("{} (changes are kept in memory only)", fault)
            }
            other => other.to_string(),
        };
        result.add_message(CmdMessage::warning(content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn resolves_by_id_then_nomor() {
        let store = StoreFixture::new()
            .with_student("a", "Ani", "10A")
            .with_student("b", "Bayu", "10A")
            .build();

        assert_eq!(resolve_student(&store, "b").unwrap().nama, "Bayu");
        // fixture roll numbers start at 1001
        assert_eq!(resolve_student(&store, "1001").unwrap().nama, "Ani");
        assert!(matches!(
            resolve_student(&store, "zzz"),
            Err(AbsensiError::StudentNotFound(_))
        ));
    }

    #[test]
    fn shared_nomor_is_ambiguous() {
        let mut store = InMemoryStore::new();
        store.insert_students(vec![
            Student {
                id: "x".into(),
                nomor: "7".into(),
                nama: "Xena".into(),
                kelas: "10A".into(),
            },
            Student {
                id: "y".into(),
                nomor: "7".into(),
                nama: "Yuda".into(),
                kelas: "10B".into(),
            },
        ]);

        assert!(matches!(
            resolve_student(&store, "7"),
            Err(AbsensiError::InvalidInput(_))
        ));
    }

    #[test]
    fn faults_become_warnings() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        store.insert_students(vec![Student {
            id: "x".into(),
            nomor: "1".into(),
            nama: "Xena".into(),
            kelas: "10A".into(),
        }]);

        let mut result = CmdResult::default();
        drain_faults(&mut store, &mut result);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        );
        assert!(result.messages[0].content.contains("kept in memory"));
    }
}
