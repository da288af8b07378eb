use crate::error::Error;
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, warn, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "info";
const DEFAULT_LOG_FILE_PATH: &str = "./logs/suffix-sweeper.log";

/// Log to stdout and to `LOG_FILE_PATH`, filtered by `TRACING_LEVEL`.
///
/// Stdout carries the bare message only, so a sweep prints exactly its
/// `Removed file:` / `Error removing` lines. When the log file cannot be
/// opened, file logging is skipped with a warning. The returned guard flushes
/// the file writer on drop and must live as long as `main`.
pub fn init_logger() -> Option<WorkerGuard> {
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let filter_layer = EnvFilter::new(filter);

    let log_file_path =
        env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE_PATH.to_string());
    let (file_writer, guard, file_error) = match log_file_writer(Path::new(&log_file_path)) {
        Ok((writer, guard)) => (Some(writer), Some(guard), None),
        Err(err) => (None, None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(message_layer(std::io::stdout))
        .with(file_writer.map(|writer| fmt::layer().with_writer(writer).with_ansi(false)))
        .with(filter_layer)
        .init();

    match file_error {
        Some(err) => warn!("File logging disabled for {}: {}", log_file_path, err),
        None => debug!("Tracing is configured for stdout and file logging."),
    }

    guard
}

/// Formatter that writes each event as its message alone: no time, level or
/// target.
pub fn message_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
}

fn log_file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard), Error> {
    let (log_dir, log_file_name) = split_log_path(path);
    fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_file_name.to_string_lossy())
        .build(log_dir)?;
    Ok(tracing_appender::non_blocking(file_appender))
}

fn split_log_path(path: &Path) -> (&Path, &Path) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = path
        .file_name()
        .map(Path::new)
        .unwrap_or_else(|| Path::new("suffix-sweeper.log"));
    (dir, file)
}
