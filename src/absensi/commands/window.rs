//! Report windows.
//!
//! Every window is an inclusive `[start, end]` range of calendar days computed from
//! a `today` supplied by the caller. The caller is responsible for passing the
//! local calendar day, not the UTC one.

use crate::error::{AbsensiError, Result};
use crate::model::{format_date, AttendanceRecord};
use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Daily,
    Weekly,
    Monthly,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Daily, ReportKind::Weekly, ReportKind::Monthly];

    /// The name used in export file names.
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Daily => "harian",
            ReportKind::Weekly => "mingguan",
            ReportKind::Monthly => "bulanan",
        }
    }

    pub fn range(&self, today: NaiveDate) -> DateRange {
        match self {
            ReportKind::Daily => DateRange {
                start: today,
                end: today,
            },
            // Trailing seven days ending today, not a calendar week
            ReportKind::Weekly => DateRange {
                start: today.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN),
                end: today,
            },
            ReportKind::Monthly => {
                let start = today.with_day(1).unwrap_or(today);
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(NaiveDate::MAX);
                DateRange { start, end }
            }
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Daily => write!(f, "daily"),
            ReportKind::Weekly => write!(f, "weekly"),
            ReportKind::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = AbsensiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "harian" | "day" => Ok(ReportKind::Daily),
            "weekly" | "mingguan" | "week" => Ok(ReportKind::Weekly),
            "monthly" | "bulanan" | "month" => Ok(ReportKind::Monthly),
            _ => Err(AbsensiError::InvalidInput(format!(
                "Unknown report kind '{}' (expected daily, weekly or monthly)",
                s
            ))),
        }
    }
}

/// Inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", format_date(self.start))
        } else {
            write!(f, "{} .. {}", format_date(self.start), format_date(self.end))
        }
    }
}

/// Records whose date falls inside the `kind` window around `today`, in input order.
pub fn select_window(
    kind: ReportKind,
    today: NaiveDate,
    records: &[AttendanceRecord],
) -> Vec<AttendanceRecord> {
    let range = kind.range(today);
    records
        .iter()
        .filter(|r| range.contains(r.date))
        .cloned()
        .collect()
}
