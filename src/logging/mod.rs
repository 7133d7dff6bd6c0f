//! Structured logging setup using tracing
//!
//! Process-wide logging is configured once at startup: a console fmt layer
//! filtered by `RUST_LOG` (falling back to `vitex=<level>`), plus an optional
//! daily-rolling JSON file layer when `VITEX_LOG_DIR` is set.
//!
//! # Example
//!
//! ```no_run
//! use vitex::logging::init_logging;
//!
//! let _guard = init_logging("info").expect("Failed to initialize logging");
//! tracing::info!("Export started");
//! ```

use crate::domain::{Result, VitexError};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable naming a directory for file logging
pub const LOG_DIR_ENV: &str = "VITEX_LOG_DIR";

/// Guard that must be kept alive for the duration of the program
/// to ensure file logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Initialize the logging system
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
///
/// # Returns
///
/// A `LoggingGuard` that must be kept alive for the duration of the program.
///
/// # Errors
///
/// Returns a configuration error for an unknown level string, or an I/O error
/// if the log directory cannot be created.
pub fn init_logging(log_level_str: &str) -> Result<LoggingGuard> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vitex={log_level}")));

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter.clone());
    layers.push(console_layer.boxed());

    let file_guard = match std::env::var(LOG_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => {
            std::fs::create_dir_all(&dir).map_err(|e| {
                VitexError::Configuration(format!("Failed to create log directory {dir}: {e}"))
            })?;

            let file_appender = RollingFileAppender::new(Rotation::DAILY, &dir, "vitex.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(non_blocking)
                .with_filter(env_filter);
            layers.push(file_layer.boxed());
            Some(guard)
        }
        _ => None,
    };

    tracing_subscriber::registry().with(layers).init();

    Ok(LoggingGuard::new(file_guard))
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(VitexError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_valid() {
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    }

    #[test]
    fn test_parse_log_level_case_insensitive() {
        assert_eq!(parse_log_level("TRACE").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("Info").unwrap(), Level::INFO);
    }

    #[test]
    fn test_parse_log_level_invalid() {
        assert!(parse_log_level("invalid").is_err());
        assert!(parse_log_level("").is_err());
    }

    #[test]
    fn test_logging_guard_creation() {
        // tracing_subscriber can only be initialized once per process, so only
        // the guard plumbing is exercised here
        let guard = LoggingGuard::new(None);
        drop(guard);
    }
}
