//! Logging configuration using tracing with a non-blocking writer.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default log file used when the terminal is owned by the TUI.
pub const DEFAULT_LOG_FILE: &str = "paramedit.log";

/// Where log events go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// Pick the target: an explicit file wins, interactive mode falls back to
    /// [`DEFAULT_LOG_FILE`], batch mode logs to stderr.
    pub fn select(file: Option<&Path>, interactive: bool) -> Self {
        match file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::File(PathBuf::from(DEFAULT_LOG_FILE)),
            None => Self::Stderr,
        }
    }
}

/// Initialize tracing.
///
/// Returns a guard that must be held for the duration of the program to ensure
/// logs are flushed. Dropping the guard flushes remaining logs.
///
/// In debug builds, span enter/exit events are logged for detailed tracing.
pub fn init_logging(target: &LogTarget, level: &str) -> WorkerGuard {
    let (writer, guard, ansi) = match target {
        LogTarget::File(log_path) => {
            let parent = log_path.parent().unwrap_or(Path::new("."));
            let filename = log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE));
            let file_appender = tracing_appender::rolling::never(parent, filename);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            (writer, guard, false)
        }
        LogTarget::Stderr => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, true)
        }
    };

    let filter = EnvFilter::try_new(format!("paramedit={level}"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    #[cfg(debug_assertions)]
    let layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry().with(filter).with(layer).init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_wins() {
        let target = LogTarget::select(Some(Path::new("/tmp/x.log")), false);
        assert_eq!(target, LogTarget::File(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn interactive_defaults_to_file() {
        assert_eq!(
            LogTarget::select(None, true),
            LogTarget::File(PathBuf::from(DEFAULT_LOG_FILE))
        );
        assert_eq!(LogTarget::select(None, false), LogTarget::Stderr);
    }
}
