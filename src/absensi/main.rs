//! # Absensi CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring (data dir, config, store) and per-command handlers
//! - `cli/render.rs`: tables and colored messages
//! - `cli/logging.rs`: tracing subscriber on stderr
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns the user-facing
//! concerns: argument parsing, reading the local date, writing export files,
//! rendering, and the exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
