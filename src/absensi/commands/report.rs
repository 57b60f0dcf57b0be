use crate::commands::window::{select_window, DateRange, ReportKind};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub today: NaiveDate,
    pub range: DateRange,
}

/// Records in the `kind` window, most recent first.
pub fn run<S: DataStore>(store: &S, kind: ReportKind, today: NaiveDate) -> Result<CmdResult> {
    let mut records = select_window(kind, today, store.records());
    records.sort_by(|a, b| b.date.cmp(&a.date));

    let mut result = CmdResult::default().with_report(Report {
        kind,
        today,
        range: kind.range(today),
    });
    if records.is_empty() {
        result.add_message(CmdMessage::info("No attendance data for this period."));
    }
    Ok(result.with_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_date, AttendanceStatus};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_most_recent_first() {
        let store = StoreFixture::new()
            .with_student("1", "Ani", "10A")
            .with_record("1", "2024-03-01", AttendanceStatus::Hadir)
            .with_record("1", "2024-03-14", AttendanceStatus::Sakit)
            .with_record("1", "2024-02-28", AttendanceStatus::Izin)
            .build();

        let result = run(&store, ReportKind::Monthly, parse_date("2024-03-15").unwrap()).unwrap();

        let report = result.report.unwrap();
        assert_eq!(report.range.start, parse_date("2024-03-01").unwrap());
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].status, AttendanceStatus::Sakit);
        assert_eq!(result.records[1].status, AttendanceStatus::Hadir);
    }

    #[test]
    fn empty_period_is_not_an_error() {
        let store = InMemoryStore::new();
        let result = run(&store, ReportKind::Daily, parse_date("2024-03-15").unwrap()).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
