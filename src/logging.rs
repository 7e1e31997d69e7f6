/// Structured logging for the notice service
///
/// Provides context-rich logging with examination / farm-area identifiers,
/// timestamps, and severity levels. Supports both console output and an
/// append-only log file for unattended runs.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Parses a level name from configuration. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Api,
    Alert,
    Notice,
    Config,
    System,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Api => write!(f, "API"),
            Component::Alert => write!(f, "ALERT"),
            Component::Notice => write!(f, "NOTICE"),
            Component::Config => write!(f, "CONFIG"),
            Component::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - e.g. the manager has no examinations yet
    Expected,
    /// Unexpected failure - server error, unreachable API, changed payload shape
    Unexpected,
    /// Unknown - cannot determine if this is expected or not
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    fn log(&self, level: LogLevel, component: &Component, context: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let context_part = context.map(|c| format!(" [{}]", c)).unwrap_or_default();
        let log_entry = format!(
            "{} {} {}{}: {}",
            timestamp, level, component, context_part, message
        );

        if self.console_timestamps {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
                LogLevel::Info | LogLevel::Debug => println!("{}", log_entry),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", component, context_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", component, context_part, message),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => println!("   [DEBUG] {}", message),
            }
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

fn emit(level: LogLevel, component: Component, context: Option<&str>, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, &component, context, message);
        }
    }
}

/// Log a general informational message
pub fn info(component: Component, context: Option<&str>, message: &str) {
    emit(LogLevel::Info, component, context, message);
}

/// Log a warning message
pub fn warn(component: Component, context: Option<&str>, message: &str) {
    emit(LogLevel::Warning, component, context, message);
}

/// Log an error message
pub fn error(component: Component, context: Option<&str>, message: &str) {
    emit(LogLevel::Error, component, context, message);
}

/// Log a debug message
pub fn debug(component: Component, context: Option<&str>, message: &str) {
    emit(LogLevel::Debug, component, context, message);
}

// ---------------------------------------------------------------------------
// Failure Classification Helpers
// ---------------------------------------------------------------------------

/// Classify an AquaGuardian API failure from its error text
pub fn classify_api_failure(error_message: &str) -> FailureType {
    if error_message.contains("HTTP error: 404") {
        // Managers without examinations or notices get a 404 from some deployments
        FailureType::Expected
    } else if error_message.contains("HTTP error")
        || error_message.contains("Transport error")
        || error_message.contains("Parse error")
    {
        FailureType::Unexpected
    } else {
        FailureType::Unknown
    }
}

/// Log an API failure with automatic classification
pub fn log_api_failure(context: &str, operation: &str, err: &dyn std::error::Error) {
    let error_msg = err.to_string();
    let failure_type = classify_api_failure(&error_msg);

    let message = format!("{} failed [{}]: {}", operation, failure_type, error_msg);

    match failure_type {
        FailureType::Expected => debug(Component::Api, Some(context), &message),
        FailureType::Unexpected => error(Component::Api, Some(context), &message),
        FailureType::Unknown => warn(Component::Api, Some(context), &message),
    }
}

// ---------------------------------------------------------------------------
// Dispatch Summary Logging
// ---------------------------------------------------------------------------

/// Level and message for a dispatch outcome. A batch is accepted or
/// rejected as a whole.
pub fn dispatch_summary(total: usize, accepted: bool) -> (LogLevel, String) {
    if accepted {
        (LogLevel::Info, format!("Dispatch complete: {} notices sent", total))
    } else {
        (LogLevel::Error, format!("Dispatch failed: 0/{} notices sent", total))
    }
}

/// Log a summary of a notice dispatch
pub fn log_dispatch_summary(total: usize, accepted: bool) {
    let (level, message) = dispatch_summary(total, accepted);
    emit(level, Component::Notice, None, &message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_from_name() {
        assert_eq!(LogLevel::from_name("warn"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_name("WARNING"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_name("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_name("verbose"), None);
    }

    #[test]
    fn test_failure_classification() {
        assert_eq!(classify_api_failure("HTTP error: 404"), FailureType::Expected);
        assert_eq!(classify_api_failure("HTTP error: 500"), FailureType::Unexpected);
        assert_eq!(
            classify_api_failure("Transport error: connection refused"),
            FailureType::Unexpected
        );
        assert_eq!(classify_api_failure("something odd"), FailureType::Unknown);
    }

    #[test]
    fn test_logging_without_init_is_silent() {
        // No logger installed in this test binary path; must not panic.
        info(Component::System, None, "hello");
        log_dispatch_summary(0, false);
    }

    #[test]
    fn test_dispatch_summary_is_all_or_nothing() {
        let (level, message) = dispatch_summary(3, true);
        assert_eq!(level, LogLevel::Info);
        assert!(message.contains("3 notices sent"));

        let (level, message) = dispatch_summary(3, false);
        assert_eq!(level, LogLevel::Error);
        assert!(message.contains("0/3"));
    }
}
