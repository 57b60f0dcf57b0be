use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "absensi", bin_name = "absensi", version)]
#[command(about = "School attendance tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the student and attendance data
    #[arg(long, global = true, env = "ABSENSI_DATA_DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Use this date (YYYY-MM-DD) instead of the local calendar day
    #[arg(long, global = true, help_heading = "Options")]
    pub today: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the student roster
    #[command(subcommand, alias = "siswa", display_order = 1)]
    Student(StudentCommands),

    /// List class names
    #[command(alias = "kelas", display_order = 2)]
    Classes,

    /// Show or record a day's attendance
    #[command(subcommand, alias = "absen", display_order = 3)]
    Attendance(AttendanceCommands),

    /// Show a daily, weekly or monthly report
    #[command(alias = "rekap", display_order = 4)]
    Report {
        /// daily, weekly or monthly (harian, mingguan, bulanan)
        kind: String,

        /// Write the report as CSV
        #[arg(long)]
        export: bool,

        /// Export file path (defaults to the generated file name in the current directory)
        #[arg(short, long, requires = "export")]
        output: Option<PathBuf>,
    },

    /// Today's numbers
    #[command(display_order = 5)]
    Dashboard,

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Configuration key (seed-roster, report-prefix)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },

    /// Create the data directory
    #[command(display_order = 7)]
    Init,
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Add a student
    #[command(alias = "a")]
    Add {
        /// Roll number
        nomor: String,
        /// Full name
        nama: String,
        /// Class
        kelas: String,
    },

    /// List students
    #[command(alias = "ls")]
    List {
        /// Only this class
        #[arg(short, long)]
        class: Option<String>,

        /// Match on name or roll number
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Delete a student and all of its attendance
    #[command(alias = "rm")]
    Delete {
        /// Student id or roll number
        student: String,
    },

    /// Import students from a CSV file (Nomor,Nama,Kelas)
    Import {
        /// CSV file, or "-" for stdin
        file: PathBuf,
    },

    /// Print a CSV import template
    Template,
}

#[derive(Subcommand, Debug)]
pub enum AttendanceCommands {
    /// Show the roster with the statuses recorded for a day
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Only this class
        #[arg(short, long)]
        class: Option<String>,
    },

    /// Record statuses, keeping marks already made that day
    Mark {
        /// Marks as <student>=<status>, e.g. 1001=hadir 1002=S
        marks: Vec<String>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Give every student still unmarked this status
        #[arg(long)]
        rest: Option<String>,

        /// Restrict --rest to one class
        #[arg(short, long, requires = "rest")]
        class: Option<String>,
    },

    /// Remove marks for a day (all of them when no student is given)
    Clear {
        /// Student ids or roll numbers
        students: Vec<String>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mark_with_rest() {
        let cli = Cli::try_parse_from([
            "absensi",
            "attendance",
            "mark",
            "1001=h",
            "1002=s",
            "--rest",
            "hadir",
            "--date",
            "2024-03-10",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Attendance(AttendanceCommands::Mark {
                marks, date, rest, ..
            })) => {
                assert_eq!(marks, vec!["1001=h", "1002=s"]);
                assert_eq!(date.as_deref(), Some("2024-03-10"));
                assert_eq!(rest.as_deref(), Some("hadir"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "absensi",
            "report",
            "weekly",
            "--today",
            "2024-03-15",
            "--data-dir",
            "/tmp/x",
        ])
        .unwrap();
        assert_eq!(cli.today.as_deref(), Some("2024-03-15"));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn output_requires_export() {
        assert!(Cli::try_parse_from(["absensi", "report", "daily", "-o", "x.csv"]).is_err());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["absensi"]).unwrap();
        assert!(cli.command.is_none());
    }
}
