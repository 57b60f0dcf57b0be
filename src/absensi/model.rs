use crate::error::{AbsensiError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Wire format for attendance dates. Zero-padded, so string order is date order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    /// Roll number as printed on the school register.
    pub nomor: String,
    pub nama: String,
    pub kelas: String,
}

impl Student {
    /// Assigns a fresh id to a validated entry.
    pub fn from_new(new: NewStudent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            nomor: new.nomor,
            nama: new.nama,
            kelas: new.kelas,
        }
    }
}

/// A student as entered on a form or read from an import row, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub nomor: String,
    pub nama: String,
    pub kelas: String,
}

impl NewStudent {
    pub fn new(
        nomor: impl Into<String>,
        nama: impl Into<String>,
        kelas: impl Into<String>,
    ) -> Self {
        Self {
            nomor: nomor.into(),
            nama: nama.into(),
            kelas: kelas.into(),
        }
    }

    /// Trims every field and rejects the entry if any of them ends up empty.
    pub fn validated(self) -> Result<Self> {
        let trimmed = Self::new(self.nomor.trim(), self.nama.trim(), self.kelas.trim());
        if trimmed.nomor.is_empty() || trimmed.nama.is_empty() || trimmed.kelas.is_empty() {
            return Err(AbsensiError::InvalidInput(
                "All fields are required (nomor, nama, kelas)".to_string(),
            ));
        }
        Ok(trimmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Hadir,
    Sakit,
    Izin,
    Alfa,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Hadir,
        AttendanceStatus::Sakit,
        AttendanceStatus::Izin,
        AttendanceStatus::Alfa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Hadir => "Hadir",
            AttendanceStatus::Sakit => "Sakit",
            AttendanceStatus::Izin => "Izin",
            AttendanceStatus::Alfa => "Alfa",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = AbsensiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hadir" | "h" => Ok(AttendanceStatus::Hadir),
            "sakit" | "s" => Ok(AttendanceStatus::Sakit),
            "izin" | "i" => Ok(AttendanceStatus::Izin),
            "alfa" | "a" => Ok(AttendanceStatus::Alfa),
            _ => Err(AbsensiError::InvalidInput(format!(
                "Unknown attendance status '{}' (expected Hadir, Sakit, Izin or Alfa)",
                s
            ))),
        }
    }
}

/// One student's status on one day.
///
/// `student_name` and `kelas` are copied from the student when the record is
/// written and are not updated afterwards, so reports show who the student was
/// on that day. `student_id` may dangle once the student is gone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub student_id: String,
    pub student_name: String,
    pub kelas: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Saved dates go through the same strict check as typed ones.
fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

impl AttendanceRecord {
    pub fn snapshot(student: &Student, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            student_id: student.id.clone(),
            student_name: student.nama.clone(),
            kelas: student.kelas.clone(),
            date,
            status,
        }
    }
}

/// Parses a `YYYY-MM-DD` date. Anything that is not exactly that shape is rejected,
/// including unpadded months and days.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let bytes = trimmed.as_bytes();
    let shaped = bytes.len() == 10 && bytes[4] == b'-' && bytes[7] == b'-';
    if !shaped {
        return Err(AbsensiError::InvalidInput(format!(
            "Invalid date '{}' (expected YYYY-MM-DD)",
            input
        )));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        AbsensiError::InvalidInput(format!("Invalid date '{}' (expected YYYY-MM-DD)", input))
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The demo roster used when no student data has been saved yet.
pub fn seed_roster() -> Vec<Student> {
    [
        ("1", "1001", "Budi Santoso", "10A"),
        ("2", "1002", "Citra Lestari", "10B"),
        ("3", "1003", "Doni Firmansyah", "10A"),
        ("4", "1004", "Eka Putri", "11A"),
        ("5", "1005", "Fajar Nugraha", "11B"),
        ("6", "1006", "Gita Amelia", "12A"),
        ("7", "1007", "Hendra Wijaya", "12B"),
        ("8", "1008", "Indah Permata", "10A"),
    ]
    .into_iter()
    .map(|(id, nomor, nama, kelas)| Student {
        id: id.to_string(),
        nomor: nomor.to_string(),
        nama: nama.to_string(),
        kelas: kelas.to_string(),
    })
    .collect()
}
