//! Logging configuration.
//!
//! Installs a `tracing` subscriber with a stdout layer and, when a log directory is
//! available, a daily rolling file that keeps only the newest file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::LOG_FILE_PREFIX;
use crate::error::{Error, Result};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "simrate_overlay=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Daily rolling log file in `dir`, one file retained
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(1)
        .build(dir)
        .map_err(|e| Error::Invalid {
            message: format!("Failed to open log file in {}: {e}", dir.display()),
        })
}

/// Initialize the logging system.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. The returned guard flushes the file writer
/// and must be held until the process exits. Calling this twice keeps the first
/// subscriber.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let (file_layer, guard, file_error) = match log_dir.map(file_appender) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard), None)
        }
        Some(Err(e)) => (None, None, Some(e)),
        None => (None, None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(file_layer);

    let _ = subscriber.try_init();

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "Logging to stdout only");
    }
    guard
}
