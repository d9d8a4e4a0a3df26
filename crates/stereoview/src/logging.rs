//! Logging bootstrap.
//!
//! The global subscriber is initialized once, after backend selection, so
//! the resolved level (including the GUI's quieter default) is in force from
//! the first record. `RUST_LOG` overrides the resolved level.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use stereoview_types::LogLevel;

/// Initialize the subscriber.
///
/// With `--log-file`, all records go to the file (append-only, no ANSI); the
/// returned guard keeps the non-blocking writer alive until process exit.
pub fn init(level: LogLevel, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            Ok(None)
        }
    }
}

fn directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warning => "warn",
        LogLevel::Error => "error",
        LogLevel::Quiet => "off",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_filter_directives() {
        assert_eq!(directive(LogLevel::Debug), "debug");
        assert_eq!(directive(LogLevel::Warning), "warn");
        assert_eq!(directive(LogLevel::Quiet), "off");
    }

    // The global subscriber can be installed once per process, so the file
    // sink gets a single end-to-end test.
    #[test]
    fn log_file_sink_appends_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        std::fs::write(&path, "existing line\n").unwrap();

        let guard = init(LogLevel::Info, Some(&path)).unwrap();
        tracing::error!("sink check");
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("existing line\n"), "append mode");
        assert!(contents.contains("sink check"));
    }
}
