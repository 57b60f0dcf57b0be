use crate::commands::reconcile::statuses_on;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{AttendanceStatus, Student};
use crate::store::DataStore;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub student: Student,
    /// `None` when nothing is recorded for the day.
    pub status: Option<AttendanceStatus>,
}

/// The roster for one day, with whatever has been recorded so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySheet {
    pub date: NaiveDate,
    pub kelas: Option<String>,
    pub rows: Vec<SheetRow>,
}

impl DaySheet {
    pub fn marked(&self) -> usize {
        self.rows.iter().filter(|r| r.status.is_some()).count()
    }
}

pub fn build<S: DataStore>(store: &S, date: NaiveDate, kelas: Option<&str>) -> DaySheet {
    let statuses = statuses_on(store.records(), date);

    let mut students: Vec<&Student> = store
        .students()
        .iter()
        .filter(|s| kelas.map_or(true, |k| s.kelas == k))
        .collect();
    students.sort_by(|a, b| a.kelas.cmp(&b.kelas).then_with(|| a.nama.cmp(&b.nama)));

    let rows = students
        .into_iter()
        .map(|student| SheetRow {
            status: statuses.get(&student.id).copied(),
            student: student.clone(),
        })
        .collect();

    DaySheet {
        date,
        kelas: kelas.map(str::to_string),
        rows,
    }
}

pub fn run<S: DataStore>(store: &S, date: NaiveDate, kelas: Option<&str>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_sheet(build(store, date, kelas)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn sorted_by_class_then_name_with_statuses() {
        let store = StoreFixture::new()
            .with_student("1", "Zaki", "10A")
            .with_student("2", "Bayu", "10B")
            .with_student("3", "Ani", "10A")
            .with_record("1", "2024-03-10", AttendanceStatus::Sakit)
            .with_record("3", "2024-03-09", AttendanceStatus::Hadir)
            .build();

        let sheet = build(&store, parse_date("2024-03-10").unwrap(), None);

        let order: Vec<&str> = sheet.rows.iter().map(|r| r.student.nama.as_str()).collect();
        assert_eq!(order, vec!["Ani", "Zaki", "Bayu"]);
        assert_eq!(sheet.rows[0].status, None);
        assert_eq!(sheet.rows[1].status, Some(AttendanceStatus::Sakit));
        assert_eq!(sheet.marked(), 1);
    }

    #[test]
    fn class_filter_limits_rows() {
        let store = StoreFixture::new()
            .with_student("1", "Zaki", "10A")
            .with_student("2", "Bayu", "10B")
            .build();

        let sheet = build(&store, parse_date("2024-03-10").unwrap(), Some("10B"));
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].student.id, "2");
        assert_eq!(sheet.kelas.as_deref(), Some("10B"));
    }
}
