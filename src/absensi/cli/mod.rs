//! # CLI Behavior
//!
//! This is **one possible UI client** for absensi, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, the system
//! clock and output formatting.
//!
//! ## Data Directory
//!
//! Resolved once per run, first match wins:
//!
//! 1. `--data-dir <path>`
//! 2. `ABSENSI_DATA_DIR`
//! 3. The platform data directory (`directories::ProjectDirs`)
//!
//! ## Today
//!
//! Reports and the dashboard use the local calendar day unless `--today` is given.
//! Commands that take a date default to the same day.
//!
//! ## Naked Execution
//!
//! Running `absensi` with no command shows the dashboard.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `logging`: tracing subscriber
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
