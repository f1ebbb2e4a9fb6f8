//! Structured JSONL logging plus human-readable stderr output.
//!
//! - **JSONL to file** (`~/.floor-finder/logs/floor-finder.jsonl`) for tooling
//! - **Compact to stderr** for developers
//!
//! stdout is left alone so the `session` command can use it for its event stream.
//!
//! ```rust,ignore
//! let _guard = floor_finder::logging::init();
//! tracing::info!(event_type = "search", results = 3, "Cross-floor search");
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "floor-finder.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }
    let log_path = log_dir.join(LOG_FILE_NAME);

    // Still log to stderr when the file can't be opened
    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            None
        }
    };

    let (subscriber, file_guard) = build_subscriber(file);
    subscriber.init();

    tracing::debug!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Assemble the layer stack: env filter, optional JSONL file layer, stderr layer.
fn build_subscriber(
    file: Option<File>,
) -> (impl tracing::Subscriber + Send + Sync + 'static, Option<WorkerGuard>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (json_layer, file_guard) = match file {
        Some(file) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer);

    (subscriber, file_guard)
}

/// Get the log directory path (~/.floor-finder/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".floor-finder").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("floor-finder-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

// =============================================================================
// STRUCTURED LOGGING HELPERS
// =============================================================================

/// Log one all-floors search pass for a route input
pub fn log_search_event(role: &str, query: &str, result_count: usize, duration_us: u128) {
    tracing::debug!(
        event_type = "search",
        role = role,
        query = query,
        result_count = result_count,
        duration_us = duration_us as u64,
        "Cross-floor search"
    );
}

/// Log a UI-facing state change (toggle, selection, floor change)
pub fn log_ui_event(component: &str, action: &str, details: Option<&str>) {
    tracing::info!(
        event_type = "ui_event",
        component = component,
        action = action,
        details = details.unwrap_or(""),
        "UI {} {}",
        component,
        action
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_jsonl_under_log_dir() {
        let path = log_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("floor-finder.jsonl")
        );
        assert!(path.starts_with(get_log_dir()));
    }

    #[test]
    fn test_file_layer_writes_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let file = File::create(&path).unwrap();

        let (subscriber, guard) = build_subscriber(Some(file));
        assert!(guard.is_some());
        tracing::subscriber::with_default(subscriber, || {
            log_ui_event("finder", "select", Some("r2"));
        });
        // Dropping the guard flushes the non-blocking writer
        drop(guard);

        let content = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["fields"]["component"], "finder");
        assert_eq!(line["fields"]["details"], "r2");
    }

    #[test]
    fn test_stderr_only_stack_without_file() {
        let (subscriber, guard) = build_subscriber(None);
        assert!(guard.is_none());
        tracing::subscriber::with_default(subscriber, || {
            log_search_event("start", "library", 2, 15);
        });
    }
}
