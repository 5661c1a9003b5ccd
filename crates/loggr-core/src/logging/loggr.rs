//! The leveled logger
//!
//! A `Loggr` checks its type registry before every line and writes
//! `<timestamp> [<TYPE>] <text>` to one output writer (stdout by default).

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};

use super::noop::NoOpLogger;
use super::traits::{Logger, SharedLogger};
use crate::config::LoggrConfig;
use crate::error::LoggrResult;
use crate::format::{format_duration, DateFormat};
use crate::registry::TypeRegistry;
use crate::timer::{label_or_default, TimerTable};

/// 80 `=` characters
pub const LINE: &str =
    "================================================================================";

/// Log type that gates timer output
pub const TIMER_LOG_TYPE: &str = "timer";

/// Leveled logger with toggleable log types, a timestamp layout and named timers
///
/// Every method takes `&self`; state lives behind per-instance locks, so one
/// logger can be shared across threads.
///
/// # Example
///
/// ```
/// use loggr_core::{BufferWriter, Loggr};
///
/// let buffer = BufferWriter::new();
/// let loggr = Loggr::with_writer(buffer.clone());
/// loggr.set_allowed_logs("info|sql");
///
/// loggr.info("starting");
/// loggr.error("not printed");
/// loggr.sql("SELECT 1");
///
/// let lines = buffer.lines();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].ends_with("[INFO] starting"));
/// assert!(lines[1].ends_with("[SQL] SELECT 1"));
/// ```
pub struct Loggr {
    registry: RwLock<TypeRegistry>,
    date_format: RwLock<DateFormat>,
    timers: Mutex<TimerTable>,
    writer: Mutex<Box<dyn Write + Send>>,
    diagnostics: SharedLogger,
}

impl Default for Loggr {
    fn default() -> Self {
        Self::new()
    }
}

impl Loggr {
    /// Create a logger writing to stdout with the default registry
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a logger writing to any writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            registry: RwLock::new(TypeRegistry::new()),
            date_format: RwLock::new(DateFormat::default()),
            timers: Mutex::new(TimerTable::new()),
            writer: Mutex::new(Box::new(writer)),
            diagnostics: Arc::new(NoOpLogger::new()),
        }
    }

    /// Create a stdout logger configured from `config`
    pub fn from_config(config: &LoggrConfig) -> Self {
        let loggr = Self::new();
        loggr.apply_config(config);
        loggr
    }

    /// Route configuration warnings (ignored log types, bad layouts) to `logger`
    pub fn with_diagnostics(mut self, logger: SharedLogger) -> Self {
        self.diagnostics = logger;
        self
    }

    /// Apply custom types, then the allowed spec, then the date layout
    pub fn apply_config(&self, config: &LoggrConfig) {
        for name in &config.custom {
            self.set_custom_log(name);
        }
        if let Some(allowed) = &config.allowed {
            self.set_allowed_logs(allowed);
        }
        match config.resolve_date_format() {
            Ok(Some(format)) => *self.date_format.write() = format,
            Ok(None) => {}
            Err(e) => crate::log_warn!(self.diagnostics, "Keeping previous date format: {}", e),
        }
    }

    // ========== Configuration ==========

    /// Enable log types: `"all"`, `"none"` or names joined by `|`
    ///
    /// Names that are not registered are ignored.
    pub fn set_allowed_logs(&self, spec: &str) {
        let ignored = self.registry.write().set_allowed(spec);
        for name in ignored {
            crate::log_warn!(self.diagnostics, "Ignoring unknown log type: {}", name);
        }
    }

    /// Register a custom log type, disabled until named in `set_allowed_logs`
    pub fn set_custom_log(&self, name: &str) {
        self.registry.write().register_custom_type(name);
    }

    /// Replace the timestamp layout (strftime)
    ///
    /// An invalid layout keeps the previous one and is reported to the
    /// diagnostics logger.
    pub fn set_date_format(&self, layout: &str) {
        if let Err(e) = self.try_set_date_format(layout) {
            crate::log_warn!(self.diagnostics, "Keeping previous date format: {}", e);
        }
    }

    /// Replace the timestamp layout, failing on an invalid one
    pub fn try_set_date_format(&self, layout: &str) -> LoggrResult<()> {
        let format = DateFormat::parse(layout)?;
        *self.date_format.write() = format;
        Ok(())
    }

    /// Replace the timestamp layout with a reference-date layout (`2006-01-02 15:04:05`)
    pub fn set_reference_date_format(&self, layout: &str) -> LoggrResult<()> {
        let format = DateFormat::from_reference_layout(layout)?;
        *self.date_format.write() = format;
        Ok(())
    }

    /// Whether `log_type` currently prints
    pub fn is_enabled(&self, log_type: &str) -> bool {
        self.registry.read().is_enabled(log_type)
    }

    /// Snapshot of the type registry
    pub fn registry(&self) -> TypeRegistry {
        self.registry.read().clone()
    }

    /// The active timestamp layout
    pub fn date_format(&self) -> DateFormat {
        self.date_format.read().clone()
    }

    // ========== Output ==========

    /// Write `text` tagged with `log_type` if that type is enabled
    ///
    /// Returns whether a line was written. Write errors are swallowed.
    pub fn emit(&self, log_type: &str, text: &str) -> bool {
        if !self.is_enabled(log_type) {
            return false;
        }

        let line = self.format_line(log_type, text);
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
        true
    }

    /// Render a line with the current time, without gating or writing
    pub fn format_line(&self, log_type: &str, text: &str) -> String {
        let timestamp = self.date_format.read().render_now();
        format!("{} [{}] {}", timestamp, log_type.to_uppercase(), text)
    }

    pub fn info(&self, text: &str) {
        self.emit("info", text);
    }

    pub fn error(&self, text: &str) {
        self.emit("error", text);
    }

    pub fn warning(&self, text: &str) {
        self.emit("warning", text);
    }

    pub fn notice(&self, text: &str) {
        self.emit("notice", text);
    }

    pub fn debug(&self, text: &str) {
        self.emit("debug", text);
    }

    pub fn fatal(&self, text: &str) {
        self.emit("fatal", text);
    }

    /// Log a query
    pub fn sql(&self, query: &str) {
        self.emit("sql", query);
    }

    /// Log with a caller-chosen type, usually one added by `set_custom_log`
    pub fn custom(&self, log_type: &str, text: &str) {
        self.emit(log_type, text);
    }

    /// Separator line, independent of configuration
    pub fn line() -> &'static str {
        LINE
    }

    // ========== Timers ==========

    /// Start (or restart) a timer; `None` means `"default"`
    ///
    /// Does nothing unless the `timer` type is enabled.
    pub fn timer_start(&self, label: Option<&str>) {
        if !self.is_enabled(TIMER_LOG_TYPE) {
            return;
        }
        self.timers.lock().start(label_or_default(label));
    }

    /// Print `<label>: <elapsed>` under the `timer` type
    ///
    /// Returns `Ok(None)` without output when `timer` is disabled, and
    /// `UnknownTimerLabel` when the label was never started. The timer keeps
    /// running after it is read.
    pub fn timer_end(&self, label: Option<&str>) -> LoggrResult<Option<Duration>> {
        if !self.is_enabled(TIMER_LOG_TYPE) {
            return Ok(None);
        }

        let label = label_or_default(label);
        let elapsed = self.timers.lock().elapsed(label)?;
        self.emit(
            TIMER_LOG_TYPE,
            &format!("{}: {}", label, format_duration(elapsed)),
        );
        Ok(Some(elapsed))
    }
}

impl Logger for Loggr {
    fn debug(&self, message: &str) {
        Loggr::debug(self, message);
    }

    fn info(&self, message: &str) {
        Loggr::info(self, message);
    }

    fn warn(&self, message: &str) {
        self.warning(message);
    }

    fn error(&self, message: &str) {
        Loggr::error(self, message);
    }
}

impl std::fmt::Debug for Loggr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loggr")
            .field("enabled", &self.registry.read().enabled_types())
            .field("date_format", &self.date_format.read().layout())
            .field("timers", &self.timers.lock().len())
            .finish()
    }
}
