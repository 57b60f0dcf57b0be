use crate::commands::window::{select_window, ReportKind};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{format_date, AttendanceRecord};
use crate::store::DataStore;
use chrono::NaiveDate;

pub const HEADER: [&str; 5] = ["Tanggal", "ID Siswa", "Nama Siswa", "Kelas", "Status"];

/// A rendered report, ready to be written wherever the caller wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
    pub rows: usize,
}

pub fn run<S: DataStore>(
    store: &S,
    kind: ReportKind,
    today: NaiveDate,
    prefix: &str,
) -> Result<CmdResult> {
    let records = select_window(kind, today, store.records());

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No attendance data to export."));
        return Ok(result);
    }

    let export = CsvExport {
        file_name: file_name(prefix, kind, today),
        content: render_csv(&records),
        rows: records.len(),
    };
    Ok(result.with_export(export).with_records(records))
}

pub fn file_name(prefix: &str, kind: ReportKind, today: NaiveDate) -> String {
    format!("{}_{}_{}.csv", prefix, kind.label(), format_date(today))
}

/// Header plus one line per record, in the order given. The name is always quoted.
pub fn render_csv(records: &[AttendanceRecord]) -> String {
    let mut out = HEADER.join(",");
    out.push('\n');
    for record in records {
        let row = [
            format_date(record.date),
            escape(&record.student_id),
            quote(&record.student_name),
            escape(&record.kelas),
            record.status.to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quote(field)
    } else {
        field.to_string()
    }
}
