//! Diagnostic logging setup.
//!
//! Console commands log to stderr. The TUI owns the terminal, so it logs to
//! `networth.log` in the data directory instead.

use crate::types::LogLevel;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub fn log_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join("networth.log")
}

fn builder(level: LogLevel) -> Builder {
    // RUST_LOG still overrides the command-line level.
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.to_string()));
    builder.format_timestamp_secs();
    builder
}

/// Log to stderr.
pub fn init_console(level: LogLevel) {
    let _ = builder(level).target(Target::Stderr).try_init();
}

/// Log to a file under `data_dir`, falling back to stderr when it cannot be
/// opened.
pub fn init_file(level: LogLevel, data_dir: &Path) {
    let path = log_file_path(data_dir);
    let file = std::fs::create_dir_all(data_dir)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => {
            let _ = builder(level)
                .target(Target::Pipe(Box::new(file)))
                .try_init();
        }
        Err(e) => {
            init_console(level);
            log::warn!("Cannot open log file {}: {}", path.display(), e);
        }
    }
}
