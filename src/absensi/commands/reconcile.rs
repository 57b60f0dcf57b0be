//! Saving a day's attendance.
//!
//! A save replaces the whole slice of records for one date and leaves every other
//! date untouched, which gives at most one record per (student, date) and makes
//! repeated saves of the same day idempotent.
//!
//! A student without an entry in the day's mapping gets no record for that date.
//! "Not marked" is its own state and is never turned into `Alfa`.

use crate::commands::helpers::drain_faults;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{format_date, AttendanceRecord, AttendanceStatus, Student};
use crate::store::DataStore;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// Status per student id for a single date.
pub type DayStatuses = HashMap<String, AttendanceStatus>;

/// Fill every student that is still unmarked, optionally only within one class.
#[derive(Debug, Clone)]
pub struct Fill {
    pub status: AttendanceStatus,
    pub kelas: Option<String>,
}

/// Replaces the records of `date` with fresh snapshots built from `day_statuses`.
///
/// Records on other dates are returned verbatim. Entries for ids that are not in
/// `all_students` are ignored. No ordering is guaranteed.
pub fn reconcile(
    all_students: &[Student],
    existing: &[AttendanceRecord],
    date: NaiveDate,
    day_statuses: &DayStatuses,
) -> Vec<AttendanceRecord> {
    let kept = existing.iter().filter(|r| r.date != date).cloned();
    let fresh = all_students.iter().filter_map(|student| {
        day_statuses
            .get(&student.id)
            .map(|status| AttendanceRecord::snapshot(student, date, *status))
    });
    kept.chain(fresh).collect()
}

/// The statuses currently recorded for `date`.
pub fn statuses_on(records: &[AttendanceRecord], date: NaiveDate) -> DayStatuses {
    records
        .iter()
        .filter(|r| r.date == date)
        .map(|r| (r.student_id.clone(), r.status))
        .collect()
}

/// Saves `day_statuses` as the complete attendance for `date`.
pub fn run<S: DataStore>(
    store: &mut S,
    date: NaiveDate,
    day_statuses: &DayStatuses,
) -> Result<CmdResult> {
    let next = reconcile(store.students(), store.records(), date, day_statuses);
    let day: Vec<AttendanceRecord> = next.iter().filter(|r| r.date == date).cloned().collect();
    debug!(date = %date, marked = day.len(), total = next.len(), "reconciled day");
    store.replace_records(next);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Attendance for {} saved ({} marked)",
        format_date(date),
        day.len()
    )));
    drain_faults(store, &mut result);
    Ok(result.with_records(day))
}

/// Updates some students' statuses for `date`, keeping what is already recorded.
pub fn mark<S: DataStore>(
    store: &mut S,
    date: NaiveDate,
    changes: &DayStatuses,
    fill: Option<&Fill>,
) -> Result<CmdResult> {
    let mut statuses = statuses_on(store.records(), date);
    statuses.extend(changes.iter().map(|(id, status)| (id.clone(), *status)));

    if let Some(fill) = fill {
        for student in store.students() {
            let in_class = fill.kelas.as_deref().map_or(true, |k| student.kelas == k);
            if in_class {
                statuses.entry(student.id.clone()).or_insert(fill.status);
            }
        }
    }

    run(store, date, &statuses)
}

/// Removes marks for `date`: for the given student ids, or all of them when empty.
pub fn clear<S: DataStore>(
    store: &mut S,
    date: NaiveDate,
    student_ids: &[String],
) -> Result<CmdResult> {
    let mut statuses = statuses_on(store.records(), date);
    let before = statuses.len();
    if student_ids.is_empty() {
        statuses.clear();
    } else {
        for id in student_ids {
            statuses.remove(id);
        }
    }
    let cleared = before - statuses.len();

    let mut result = run(store, date, &statuses)?;
    result.messages.insert(
        0,
        CmdMessage::info(format!(
            "Cleared {} mark(s) for {}",
            cleared,
            format_date(date)
        )),
    );
    Ok(result)
}
