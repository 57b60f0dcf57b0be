use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::AttendanceStatus;
use crate::store::DataStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Dashboard numbers for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub date: NaiveDate,
    pub student_count: usize,
    pub marked: usize,
    pub present: usize,
    /// Every status appears, with zero when unused.
    pub by_status: BTreeMap<AttendanceStatus, usize>,
    /// `present / marked`. Unmarked students are left out of the denominator,
    /// and the rate is `None` while nobody has been marked.
    pub rate: Option<f64>,
}

impl Summary {
    pub fn rate_percent(&self) -> Option<f64> {
        self.rate.map(|r| (r * 1000.0).round() / 10.0)
    }
}

pub fn compute<S: DataStore>(store: &S, date: NaiveDate) -> Summary {
    let mut by_status: BTreeMap<AttendanceStatus, usize> =
        AttendanceStatus::ALL.iter().map(|s| (*s, 0)).collect();

    let mut marked = 0;
    for record in store.records().iter().filter(|r| r.date == date) {
        marked += 1;
        *by_status.entry(record.status).or_default() += 1;
    }
    let present = by_status
        .get(&AttendanceStatus::Hadir)
        .copied()
        .unwrap_or_default();
    let rate = (marked > 0).then(|| present as f64 / marked as f64);

    Summary {
        date,
        student_count: store.students().len(),
        marked,
        present,
        by_status,
        rate,
    }
}

pub fn run<S: DataStore>(store: &S, today: NaiveDate) -> Result<CmdResult> {
    Ok(CmdResult::default().with_summary(compute(store, today)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn rate_ignores_unmarked_students() {
        let store = StoreFixture::new()
            .with_student("1", "Ani", "10A")
            .with_student("2", "Bayu", "10A")
            .with_student("3", "Citra", "10B")
            .with_student("4", "Doni", "10B")
            .with_record("1", "2024-03-10", AttendanceStatus::Hadir)
            .with_record("2", "2024-03-10", AttendanceStatus::Sakit)
            .with_record("3", "2024-03-09", AttendanceStatus::Hadir)
            .build();

        let summary = compute(&store, parse_date("2024-03-10").unwrap());

        assert_eq!(summary.student_count, 4);
        assert_eq!(summary.marked, 2);
        assert_eq!(summary.present, 1);
        assert_eq!(summary.by_status[&AttendanceStatus::Sakit], 1);
        assert_eq!(summary.by_status[&AttendanceStatus::Alfa], 0);
        assert_eq!(summary.rate, Some(0.5));
        assert_eq!(summary.rate_percent(), Some(50.0));
    }

    #[test]
    fn nothing_marked_has_no_rate() {
        let summary = compute(&InMemoryStore::new(), parse_date("2024-03-10").unwrap());
        assert_eq!(summary.marked, 0);
        assert_eq!(summary.rate, None);
        assert_eq!(summary.by_status.len(), 4);
    }
}
