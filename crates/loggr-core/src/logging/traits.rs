//! Logger trait definition

use std::sync::Arc;

/// Minimal leveled logger abstraction
///
/// Implementations:
/// - `NoOpLogger`: Silent logger, the default diagnostics hook
/// - `ConsoleLogger`: Logs to stderr
/// - `Loggr`: Routes through its type registry (`warn` maps to `warning`)
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

/// Log to a custom type on a `Loggr`
///
/// ```
/// use loggr_core::{log_custom, BufferWriter, Loggr};
///
/// let buffer = BufferWriter::new();
/// let loggr = Loggr::with_writer(buffer.clone());
/// loggr.set_custom_log("audit");
/// loggr.set_allowed_logs("audit");
///
/// log_custom!(loggr, "audit", "user {} logged in", 42);
/// assert!(buffer.contents().contains("[AUDIT] user 42 logged in"));
/// ```
#[macro_export]
macro_rules! log_custom {
    ($logger:expr, $log_type:expr, $($arg:tt)*) => {
        $logger.custom($log_type, &format!($($arg)*))
    };
}
