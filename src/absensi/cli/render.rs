//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function returns a
//! `String` so it can be tested without a terminal; handlers print it.
//!
//! Tables are laid out by display width (`unicode-width`), padded before coloring
//! so escape codes never count towards a column.

use absensi::api::{CmdMessage, MessageLevel};
use absensi::commands::report::Report;
use absensi::commands::sheet::DaySheet;
use absensi::commands::summary::Summary;
use absensi::config::AbsensiConfig;
use absensi::model::{format_date, AttendanceRecord, AttendanceStatus, Student};
use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const NOT_MARKED: &str = "-";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn render_students(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found.\n".to_string();
    }
    let nomor_width = column_width(students.iter().map(|s| s.nomor.as_str()), "Nomor");
    let kelas_width = column_width(students.iter().map(|s| s.kelas.as_str()), "Kelas");

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}  {}\n",
        pad("Nomor", nomor_width).bold(),
        pad("Nama", NAME_WIDTH).bold(),
        pad("Kelas", kelas_width).bold(),
        "ID".bold()
    ));
    for s in students {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            pad(&s.nomor, nomor_width),
            pad(&truncate_to_width(&s.nama, NAME_WIDTH), NAME_WIDTH),
            pad(&s.kelas, kelas_width),
            s.id.dimmed()
        ));
    }
    out
}

pub fn render_classes(classes: &[String]) -> String {
    if classes.is_empty() {
        return "No classes yet.\n".to_string();
    }
    classes.iter().map(|k| format!("{}\n", k)).collect()
}

pub fn render_sheet(sheet: &DaySheet) -> String {
    let mut out = format!(
        "{} {}",
        "Attendance".bold(),
        format_date(sheet.date).yellow()
    );
    if let Some(kelas) = &sheet.kelas {
        out.push_str(&format!(" ({})", kelas));
    }
    out.push('\n');

    if sheet.rows.is_empty() {
        out.push_str("No students found.\n");
        return out;
    }

    let nomor_width = column_width(sheet.rows.iter().map(|r| r.student.nomor.as_str()), "Nomor");
    let kelas_width = column_width(sheet.rows.iter().map(|r| r.student.kelas.as_str()), "Kelas");
    for row in &sheet.rows {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            pad(&row.student.kelas, kelas_width),
            pad(&row.student.nomor, nomor_width),
            pad(&truncate_to_width(&row.student.nama, NAME_WIDTH), NAME_WIDTH),
            status_cell(row.status)
        ));
    }
    out.push_str(&format!(
        "{}\n",
        format!("{} of {} marked", sheet.marked(), sheet.rows.len()).dimmed()
    ));
    out
}

pub fn render_report(report: &Report, records: &[AttendanceRecord]) -> String {
    let mut out = format!(
        "{} {} {}\n",
        "Report".bold(),
        report.kind.label(),
        report.range.to_string().yellow()
    );
    if records.is_empty() {
        return out;
    }

    let kelas_width = column_width(records.iter().map(|r| r.kelas.as_str()), "Kelas");
    out.push_str(&format!(
        "{}  {}  {}  {}\n",
        pad("Tanggal", 10).bold(),
        pad("Nama", NAME_WIDTH).bold(),
        pad("Kelas", kelas_width).bold(),
        "Status".bold()
    ));
    for r in records {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            format_date(r.date),
            pad(&truncate_to_width(&r.student_name, NAME_WIDTH), NAME_WIDTH),
            pad(&r.kelas, kelas_width),
            status_cell(Some(r.status))
        ));
    }
    out
}

pub fn render_summary(summary: &Summary) -> String {
    let rate = summary
        .rate_percent()
        .map(|p| format!("{:.1}%", p))
        .unwrap_or_else(|| NOT_MARKED.to_string());

    let mut out = format!("{} {}\n", "Dashboard".bold(), format_date(summary.date).yellow());
    out.push_str(&format!("{}  {}\n", pad("Students", 10), summary.student_count));
    out.push_str(&format!(
        "{}  {} of {}\n",
        pad("Marked", 10),
        summary.marked,
        summary.student_count
    ));
    for (status, count) in &summary.by_status {
        out.push_str(&format!("{}  {}\n", status_cell(Some(*status)), count));
    }
    out.push_str(&format!("{}  {}\n", pad("Rate", 10), rate.bold()));
    out
}

pub fn render_config(config: &AbsensiConfig) -> String {
    AbsensiConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|v| format!("{} = {}\n", key, v)))
        .collect()
}

fn status_cell(status: Option<AttendanceStatus>) -> ColoredString {
    let Some(status) = status else {
        return pad(NOT_MARKED, 10).dimmed();
    };
    let text = pad(status.as_str(), 10);
    match status {
        AttendanceStatus::Hadir => text.green(),
        AttendanceStatus::Sakit => text.yellow(),
        AttendanceStatus::Izin => text.blue(),
        AttendanceStatus::Alfa => text.red(),
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values.map(|v| v.width()).fold(header.width(), usize::max)
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
