//! Dispatch and per-command handlers.
//!
//! - `run()`: parses arguments, installs logging, dispatches
//! - `init_context()`: resolves the data directory, loads config, opens the store
//! - `handle_*()`: call the API and print the result

use super::logging;
use super::render::{
    print_messages, render_classes, render_config, render_report, render_sheet,
    render_students, render_summary,
};
use super::setup::{AttendanceCommands, Cli, Commands, StudentCommands};
use absensi::api::{AbsensiApi, AbsensiPaths, CmdMessage, ConfigAction};
use absensi::config::AbsensiConfig;
use absensi::error::{AbsensiError, Result};
use absensi::model::{format_date, parse_date};
use absensi::store::fs::FileStore;
use absensi::store::DataStore;
use chrono::NaiveDate;
use clap::Parser;
use directories::ProjectDirs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

struct AppContext {
    api: AbsensiApi<FileStore>,
    config: AbsensiConfig,
    today: NaiveDate,
}

impl AppContext {
    /// An explicit date, or today.
    fn date_or_today(&self, date: Option<String>) -> String {
        date.unwrap_or_else(|| format_date(self.today))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Student(cmd)) => match cmd {
            StudentCommands::Add { nomor, nama, kelas } => {
                handle_student_add(&mut ctx, &nomor, &nama, &kelas)
            }
            StudentCommands::List { class, search } => {
                handle_student_list(&ctx, class.as_deref(), search.as_deref())
            }
            StudentCommands::Delete { student } => handle_student_delete(&mut ctx, &student),
            StudentCommands::Import { file } => handle_student_import(&mut ctx, &file),
            StudentCommands::Template => handle_template(&ctx),
        },
        Some(Commands::Classes) => handle_classes(&ctx),
        Some(Commands::Attendance(cmd)) => match cmd {
            AttendanceCommands::Show { date, class } => {
                handle_attendance_show(&ctx, date, class.as_deref())
            }
            AttendanceCommands::Mark {
                marks,
                date,
                rest,
                class,
            } => handle_attendance_mark(&mut ctx, date, &marks, rest.as_deref(), class.as_deref()),
            AttendanceCommands::Clear { students, date } => {
                handle_attendance_clear(&mut ctx, date, &students)
            }
        },
        Some(Commands::Report {
            kind,
            export,
            output,
        }) => {
            if export {
                handle_export(&ctx, &kind, output)
            } else {
                handle_report(&ctx, &kind)
            }
        }
        Some(Commands::Dashboard) | None => handle_dashboard(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let today = match cli.today.as_deref() {
        Some(date) => parse_date(date)?,
        None => chrono::Local::now().date_naive(),
    };

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    debug!(data_dir = %data_dir.display(), today = %today, "starting");

    let config = AbsensiConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        AbsensiConfig::default()
    });

    let mut store = FileStore::open_dir(data_dir.clone(), config.seed_policy());
    let load_warnings: Vec<CmdMessage> = store
        .take_faults()
        .into_iter()
        .map(|fault| CmdMessage::warning(fault.to_string()))
        .collect();
    print_messages(&load_warnings);

    let api = AbsensiApi::new(store, AbsensiPaths { data_dir });
    Ok(AppContext { api, config, today })
}

/// `--data-dir` (or `ABSENSI_DATA_DIR`, filled in by clap), else the platform data dir.
fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("id", "absensi", "absensi")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            AbsensiError::StorageUnavailable(
                "could not determine a data directory; pass --data-dir".to_string(),
            )
        })
}

fn handle_student_add(ctx: &mut AppContext, nomor: &str, nama: &str, kelas: &str) -> Result<()> {
    let result = ctx.api.add_student(nomor, nama, kelas)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_student_list(ctx: &AppContext, class: Option<&str>, search: Option<&str>) -> Result<()> {
    let result = ctx.api.list_students(class, search)?;
    print!("{}", render_students(&result.listed_students));
    print_messages(&result.messages);
    Ok(())
}

fn handle_student_delete(ctx: &mut AppContext, student: &str) -> Result<()> {
    let result = ctx.api.delete_student(student)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_student_import(ctx: &mut AppContext, file: &Path) -> Result<()> {
    let text = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };
    let result = ctx.api.import_students(&text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_template(ctx: &AppContext) -> Result<()> {
    print!("{}", ctx.api.roster_template());
    Ok(())
}

fn handle_classes(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.classes()?;
    print!("{}", render_classes(&result.classes));
    Ok(())
}

fn handle_attendance_show(ctx: &AppContext, date: Option<String>, class: Option<&str>) -> Result<()> {
    let date = ctx.date_or_today(date);
    let result = ctx.api.day_sheet(&date, class)?;
    if let Some(sheet) = &result.sheet {
        print!("{}", render_sheet(sheet));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_attendance_mark(
    ctx: &mut AppContext,
    date: Option<String>,
    marks: &[String],
    rest: Option<&str>,
    class: Option<&str>,
) -> Result<()> {
    let date = ctx.date_or_today(date);
    let result = ctx.api.mark_attendance(&date, marks, rest, class)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_attendance_clear(
    ctx: &mut AppContext,
    date: Option<String>,
    students: &[String],
) -> Result<()> {
    let date = ctx.date_or_today(date);
    let result = ctx.api.clear_attendance(&date, students)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &AppContext, kind: &str) -> Result<()> {
    let result = ctx.api.report(kind, ctx.today)?;
    if let Some(report) = &result.report {
        print!("{}", render_report(report, &result.records));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, kind: &str, output: Option<PathBuf>) -> Result<()> {
    let result = ctx
        .api
        .export_report(kind, ctx.today, &ctx.config.report_prefix)?;

    if let Some(export) = &result.export {
        let path = output.unwrap_or_else(|| PathBuf::from(&export.file_name));
        std::fs::write(&path, &export.content)?;
        print_messages(&[CmdMessage::success(format!(
            "Exported {} record(s) to {}",
            export.rows,
            path.display()
        ))]);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.summary(ctx.today)?;
    if let Some(summary) = &result.summary {
        print!("{}", render_summary(summary));
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
