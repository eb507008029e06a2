//! Logging setup
//!
//! Stdout carries the wire response, so log output goes to a rolling file
//! under `$CLAUDE_HOOKS_LOG_DIR` (default `.claude-hooks/logs`), written
//! through a non-blocking appender. Filtering follows `RUST_LOG`, defaulting
//! to `info`.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::core::HookResult;

const LOG_DIR_ENV: &str = "CLAUDE_HOOKS_LOG_DIR";
const LOG_FILE_PREFIX: &str = "claude-hooks.log";

/// Directory log files are written to
pub fn log_dir() -> PathBuf {
    std::env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".claude-hooks/logs"))
}

/// Initialize the global tracing subscriber, logging under `log_dir()`
///
/// The returned guard flushes buffered log lines when dropped; hold it for
/// the life of the process. Failure here must never cost the host its wire
/// response - callers degrade to running without file logging.
pub fn init_logging() -> HookResult<WorkerGuard> {
    init_logging_to(&log_dir())
}

/// Initialize the global tracing subscriber with an explicit log directory
pub fn init_logging_to(dir: &Path) -> HookResult<WorkerGuard> {
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
