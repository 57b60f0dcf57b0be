//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for all absensi operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Parses raw user input**: dates, statuses, report kinds and student selectors
//!   arrive as strings and leave as typed values
//! - **Rejects bad input before anything changes**: every argument of a call is
//!   parsed first, so an `InvalidInput` error never leaves a half-applied mutation
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file writing
//! - **Reading the clock**: callers pass "today" explicitly
//!
//! ## Generic Over DataStore
//!
//! `AbsensiApi<S: DataStore>` is generic over the storage backend:
//! - Production: `AbsensiApi<FileStore>`
//! - Testing: `AbsensiApi<InMemoryStore>`
//!
//! ## Marks
//!
//! Attendance edits are written `<selector>=<status>`, e.g. `1001=hadir` or `3=S`.
//! The selector is a student id or a unique roll number.

use crate::commands;
use crate::commands::reconcile::{DayStatuses, Fill};
use crate::commands::window::ReportKind;
use crate::error::{AbsensiError, Result};
use crate::model::{parse_date, AttendanceStatus, NewStudent};
use crate::store::DataStore;
use chrono::NaiveDate;

/// The main API facade for absensi operations.
pub struct AbsensiApi<S: DataStore> {
    store: S,
    paths: commands::AbsensiPaths,
}

impl<S: DataStore> AbsensiApi<S> {
    pub fn new(store: S, paths: commands::AbsensiPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_student(&mut self, nomor: &str, nama: &str, kelas: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, NewStudent::new(nomor, nama, kelas))
    }

    pub fn import_students(&mut self, csv_text: &str) -> Result<CmdResult> {
        commands::import::run(&mut self.store, csv_text)
    }

    pub fn roster_template(&self) -> &'static str {
        commands::import::TEMPLATE
    }

    pub fn delete_student(&mut self, selector: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, selector)
    }

    pub fn list_students(&self, kelas: Option<&str>, search: Option<&str>) -> Result<CmdResult> {
        let filter = StudentFilter {
            kelas: non_empty(kelas),
            search: non_empty(search),
        };
        commands::list::run(&self.store, &filter)
    }

    pub fn classes(&self) -> Result<CmdResult> {
        commands::list::run_classes(&self.store)
    }

    pub fn day_sheet(&self, date: &str, kelas: Option<&str>) -> Result<CmdResult> {
        let date = parse_date(date)?;
        let kelas = non_empty(kelas);
        commands::sheet::run(&self.store, date, kelas.as_deref())
    }

    /// Saves `marks` as the complete attendance for `date`. Students not listed
    /// end up unmarked.
    pub fn save_attendance<I: AsRef<str>>(&mut self, date: &str, marks: &[I]) -> Result<CmdResult> {
        let date = parse_date(date)?;
        let statuses = self.parse_marks(marks)?;
        commands::reconcile::run(&mut self.store, date, &statuses)
    }

    /// Applies `marks` on top of what is already recorded for `date`. With `rest`,
    /// every student still unmarked (in `kelas`, if given) gets that status.
    pub fn mark_attendance<I: AsRef<str>>(
        &mut self,
        date: &str,
        marks: &[I],
        rest: Option<&str>,
        kelas: Option<&str>,
    ) -> Result<CmdResult> {
        let date = parse_date(date)?;
        let changes = self.parse_marks(marks)?;
        let fill = rest
            .map(|status| {
                Ok::<_, AbsensiError>(Fill {
                    status: status.parse()?,
                    kelas: non_empty(kelas),
                })
            })
            .transpose()?;
        if changes.is_empty() && fill.is_none() {
            return Err(AbsensiError::InvalidInput(
                "Nothing to mark: give <student>=<status> pairs or a status for the rest"
                    .to_string(),
            ));
        }
        commands::reconcile::mark(&mut self.store, date, &changes, fill.as_ref())
    }

    /// Removes marks for `date`; all of them when `selectors` is empty.
    pub fn clear_attendance<I: AsRef<str>>(
        &mut self,
        date: &str,
        selectors: &[I],
    ) -> Result<CmdResult> {
        let date = parse_date(date)?;
        let ids = self.resolve_ids(selectors)?;
        commands::reconcile::clear(&mut self.store, date, &ids)
    }

    pub fn report(&self, kind: &str, today: NaiveDate) -> Result<CmdResult> {
        let kind: ReportKind = kind.parse()?;
        commands::report::run(&self.store, kind, today)
    }

    pub fn export_report(&self, kind: &str, today: NaiveDate, prefix: &str) -> Result<CmdResult> {
        let kind: ReportKind = kind.parse()?;
        commands::export::run(&self.store, kind, today, prefix)
    }

    pub fn summary(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::summary::run(&self.store, today)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths)
    }

    fn resolve_ids<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<String>> {
        let selectors: Vec<String> = selectors.iter().map(|s| s.as_ref().to_string()).collect();
        Ok(commands::helpers::resolve_students(&self.store, &selectors)?
            .into_iter()
            .map(|s| s.id)
            .collect())
    }

    fn parse_marks<I: AsRef<str>>(&self, marks: &[I]) -> Result<DayStatuses> {
        let mut statuses = DayStatuses::new();
        for mark in marks {
            let (selector, status) = parse_mark(mark.as_ref())?;
            let student = commands::helpers::resolve_student(&self.store, selector)?;
            statuses.insert(student.id.clone(), status);
        }
        Ok(statuses)
    }
}

/// Splits `<selector>=<status>`.
pub fn parse_mark(input: &str) -> Result<(&str, AttendanceStatus)> {
    let (selector, status) = input.split_once('=').ok_or_else(|| {
        AbsensiError::InvalidInput(format!(
            "Invalid mark '{}' (expected <student>=<status>)",
            input
        ))
    })?;
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(AbsensiError::InvalidInput(format!(
            "Invalid mark '{}' (missing student)",
            input
        )));
    }
    Ok((selector, status.parse()?))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::StudentFilter;
pub use commands::{AbsensiPaths, CmdMessage, CmdResult, MessageLevel};
