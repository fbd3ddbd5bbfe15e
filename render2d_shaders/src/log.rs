//! Logging for the shader subsystem
//!
//! The `Logger` trait is the diagnostics sink. Compile and link failures
//! reach it at error level with the file and line of the report; build and
//! teardown summaries are logged at debug and info level.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Receiver of every shader subsystem log line
///
/// Install one with `Diagnostics::set_logger` to route the lines into the
/// host application's own log.
///
/// # Example
///
/// ```no_run
/// use render2d_shaders::render2d::log::{Logger, LogEntry, LogSeverity};
///
/// struct ErrorsOnly;
///
/// impl Logger for ErrorsOnly {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity == LogSeverity::Error {
///             eprintln!("{}", entry.message);
///         }
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// One log line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Reporting component, e.g. "render2d::ShaderProgram"
    pub source: String,
    pub message: String,
    /// Reporting file; set for error lines only
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogSeverity {
    fn label(self) -> ColoredString {
        match self {
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        }
    }
}

/// Colored stderr logger, installed until `Diagnostics::set_logger` is called
///
/// Lines read `[timestamp] [SEVERITY] [source] message`, followed by
/// `(file:line)` when the entry carries a location.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let location = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };
        eprintln!(
            "[{}] [{}] [{}] {}{}",
            datetime.format("%H:%M:%S%.3f"),
            entry.severity.label(),
            entry.source.bright_blue(),
            entry.message,
            location
        );
    }
}

// ===== LOGGING MACROS =====

#[doc(hidden)]
#[macro_export]
macro_rules! __shader_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::render2d::Diagnostics::log(
            $crate::render2d::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// # Example
///
/// ```no_run
/// render2d_shaders::shader_debug!("render2d::ShaderContext", "Released {} shader programs", 10);
/// ```
#[macro_export]
macro_rules! shader_debug {
    ($source:expr, $($arg:tt)*) => { $crate::__shader_log!(Debug, $source, $($arg)*) };
}

/// Log an INFO message
#[macro_export]
macro_rules! shader_info {
    ($source:expr, $($arg:tt)*) => { $crate::__shader_log!(Info, $source, $($arg)*) };
}

/// Log a WARN message
#[macro_export]
macro_rules! shader_warn {
    ($source:expr, $($arg:tt)*) => { $crate::__shader_log!(Warn, $source, $($arg)*) };
}

/// Log an ERROR message with the file and line of the call
#[macro_export]
macro_rules! shader_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::render2d::Diagnostics::log_detailed(
            $crate::render2d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
