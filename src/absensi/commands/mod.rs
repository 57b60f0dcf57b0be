//! # Command Layer
//!
//! This module contains the **core business logic** of absensi. Each command lives in its
//! own submodule and implements pure Rust functions that operate on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on `Student`, `AttendanceRecord` and the other model types
//! - Return structured `CmdResult` with affected data and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any terminal I/O**: No stdout, stderr, or formatting for humans
//! - **Argument parsing**: Raw strings are parsed by the API layer
//! - **Reading the clock**: "today" always arrives as a parameter
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Storage Faults
//!
//! A failed write-through does not fail the command. The store keeps the new state in
//! memory; the command turns the queued fault into a warning message
//! (see [`helpers::drain_faults`]).
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and check the `CmdResult` contents and the store afterwards.
//!
//! ## Command Modules
//!
//! - [`add`]: Add one student
//! - [`import`]: Bulk-add students from CSV text
//! - [`delete`]: Remove a student and its attendance
//! - [`list`]: Filter the roster, list class names
//! - [`sheet`]: A day's roster with recorded statuses
//! - [`reconcile`]: Save, mark and clear a day's attendance
//! - [`window`]: Report date windows
//! - [`report`]: Windowed records for display
//! - [`export`]: Windowed records as CSV
//! - [`summary`]: Dashboard numbers for a day
//! - [`config`]: Manage configuration
//! - [`init`]: Create the data directory

use crate::config::AbsensiConfig;
use crate::model::{AttendanceRecord, Student};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod init;
pub mod list;
pub mod reconcile;
pub mod report;
pub mod sheet;
pub mod summary;
pub mod window;

#[derive(Debug, Clone)]
pub struct AbsensiPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub classes: Vec<String>,
    pub records: Vec<AttendanceRecord>,
    pub sheet: Option<sheet::DaySheet>,
    pub report: Option<report::Report>,
    pub export: Option<export::CsvExport>,
    pub summary: Option<summary::Summary>,
    pub config: Option<AbsensiConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_records(mut self, records: Vec<AttendanceRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_sheet(mut self, sheet: sheet::DaySheet) -> Self {
        self.sheet = Some(sheet);
        self
    }

    pub fn with_report(mut self, report: report::Report) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_export(mut self, export: export::CsvExport) -> Self {
        self.export = Some(export);
        self
    }

    pub fn with_summary(mut self, summary: summary::Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: AbsensiConfig) -> Self {
        self.config = Some(config);
        self
    }
}
