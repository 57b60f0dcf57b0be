use crate::commands::helpers::drain_faults;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbsensiError, Result};
use crate::model::{NewStudent, Student};
use crate::store::DataStore;
use tracing::debug;

/// Starter file offered to users before their first import.
pub const TEMPLATE: &str = "Nomor,Nama,Kelas\n1001,Budi Santoso,10A\n1002,Citra Lestari,10B\n";

/// Reads roster rows from CSV text.
///
/// The first line is a header and is skipped. A row is kept only if it has exactly
/// three fields (`Nomor,Nama,Kelas`) and a non-empty first field; other rows are
/// dropped without comment. Zero kept rows is an `InvalidFormat` error.
pub fn parse_roster(text: &str) -> Result<Vec<NewStudent>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 3 || record[0].is_empty() {
            debug!(line = line + 2, fields = record.len(), "skipping row");
            continue;
        }
        rows.push(NewStudent::new(&record[0], &record[1], &record[2]));
    }

    if rows.is_empty() {
        return Err(AbsensiError::InvalidFormat(
            "File contains no valid student rows (expected columns: Nomor, Nama, Kelas)"
                .to_string(),
        ));
    }
    Ok(rows)
}

pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let students: Vec<Student> = parse_roster(text)?
        .into_iter()
        .map(Student::from_new)
        .collect();
    store.insert_students(students.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} student(s)",
        students.len()
    )));
    drain_faults(store, &mut result);
    Ok(result.with_affected_students(students))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn template_parses() {
        let rows = parse_roster(TEMPLATE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], NewStudent::new("1001", "Budi Santoso", "10A"));
    }

    #[test]
    fn drops_malformed_rows() {
        let text = "Nomor,Nama,Kelas\n\
                    1001, Budi Santoso ,10A\n\
                    1002,Citra Lestari\n\
                    ,Tanpa Nomor,10B\n\
                    1003,Doni,10A,extra\n\
                    \n\
                    1004,Eka Putri,11A\r\n";
        let rows = parse_roster(text).unwrap();

        let nomors: Vec<&str> = rows.iter().map(|r| r.nomor.as_str()).collect();
        assert_eq!(nomors, vec!["1001", "1004"]);
        assert_eq!(rows[0].nama, "Budi Santoso");
        assert_eq!(rows[1].kelas, "11A");
    }

    #[test]
    fn header_only_is_invalid_format() {
        let err = parse_roster("Nomor,Nama,Kelas\n").unwrap_err();
        assert!(matches!(err, AbsensiError::InvalidFormat(_)));
        assert!(matches!(
            parse_roster("").unwrap_err(),
            AbsensiError::InvalidFormat(_)
        ));
    }

    #[test]
    fn failed_import_applies_nothing() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "Nomor,Nama,Kelas\nfoo\n").unwrap_err();
        assert!(matches!(err, AbsensiError::InvalidFormat(_)));
        assert!(store.students().is_empty());
    }

    #[test]
    fn imported_students_get_distinct_ids() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, TEMPLATE).unwrap();

        assert_eq!(result.affected_students.len(), 2);
        assert_ne!(
            result.affected_students[0].id,
            result.affected_students[1].id
        );
        assert_eq!(store.students().len(), 2);
    }
}
