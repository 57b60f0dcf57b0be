use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Student;
use crate::store::DataStore;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    /// Exact class name.
    pub kelas: Option<String>,
    /// Case-insensitive match on the name, or a substring of the roll number.
    pub search: Option<String>,
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(kelas) = &self.kelas {
            if &student.kelas != kelas {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                student.nama.to_lowercase().contains(&term.to_lowercase())
                    || student.nomor.contains(term)
            }
        }
    }
}

pub fn run<S: DataStore>(store: &S, filter: &StudentFilter) -> Result<CmdResult> {
    let listed: Vec<Student> = store
        .students()
        .iter()
        .filter(|s| filter.matches(s))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_students(listed))
}

/// Distinct class names, sorted.
pub fn classes<S: DataStore>(store: &S) -> Vec<String> {
    store
        .students()
        .iter()
        .map(|s| s.kelas.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn run_classes<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_classes(classes(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn roster() -> InMemoryStore {
        StoreFixture::new()
            .with_student("1", "Budi Santoso", "10A")
            .with_student("2", "Citra Lestari", "10B")
            .with_student("3", "Doni Firmansyah", "10A")
            .build()
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_students
            .iter()
            .map(|s| s.nama.as_str())
            .collect()
    }

    #[test]
    fn no_filter_lists_in_store_order() {
        let result = run(&roster(), &StudentFilter::default()).unwrap();
        assert_eq!(
            names(&result),
            vec!["Budi Santoso", "Citra Lestari", "Doni Firmansyah"]
        );
    }

    #[test]
    fn filters_by_class_and_search() {
        let store = roster();
        let by_class = StudentFilter {
            kelas: Some("10A".into()),
            search: None,
        };
        assert_eq!(
            names(&run(&store, &by_class).unwrap()),
            vec!["Budi Santoso", "Doni Firmansyah"]
        );

        let by_name = StudentFilter {
            kelas: None,
            search: Some("citra".into()),
        };
        assert_eq!(names(&run(&store, &by_name).unwrap()), vec!["Citra Lestari"]);

        let by_nomor = StudentFilter {
            kelas: Some("10A".into()),
            search: Some("1003".into()),
        };
        assert_eq!(
            names(&run(&store, &by_nomor).unwrap()),
            vec!["Doni Firmansyah"]
        );
    }

    #[test]
    fn classes_are_distinct_and_sorted() {
        let store = StoreFixture::new()
            .with_student("1", "A", "11B")
            .with_student("2", "B", "10A")
            .with_student("3", "C", "11B")
            .build();
        assert_eq!(classes(&store), vec!["10A", "11B"]);
        assert!(classes(&InMemoryStore::new()).is_empty());
    }
}
