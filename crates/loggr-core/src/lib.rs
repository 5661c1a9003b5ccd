//! Loggr Core
//!
//! Leveled console logging with log types that can be switched on and off,
//! a configurable timestamp layout, and named stopwatch timers.
//!
//! Each line is written as `<timestamp> [<TYPE>] <message>`:
//!
//! ```text
//! 2024-03-09 17:05:01 [INFO] server started
//! 2024-03-09 17:05:02 [TIMER] startup: 1.204s
//! ```
//!
//! ## Explicit instances
//!
//! ```rust
//! use loggr_core::Loggr;
//!
//! let loggr = Loggr::new();
//! loggr.set_custom_log("audit");
//! loggr.set_allowed_logs("info|error|audit|timer");
//!
//! loggr.timer_start(Some("startup"));
//! loggr.info("server started");
//! loggr.custom("audit", "admin logged in");
//! loggr.timer_end(Some("startup")).unwrap();
//! ```
//!
//! ## Process-wide default
//!
//! ```rust
//! loggr_core::set_allowed_logs("info|sql");
//! loggr_core::sql("SELECT * FROM users");
//! println!("{}", loggr_core::line());
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod registry;
pub mod timer;

// Re-export commonly used types
pub use config::LoggrConfig;

pub use error::{LoggrError, LoggrResult};

pub use format::{format_duration, DateFormat, DEFAULT_DATE_FORMAT};

pub use logging::{
    BufferWriter, ConsoleLogger, Logger, Loggr, NoOpLogger, SharedLogger, LINE,
};

pub use logging::global::{
    custom, debug, default_logger, error, fatal, info, line, notice, set_allowed_logs,
    set_custom_log, set_date_format, sql, time_end, time_start, warning,
};

pub use registry::{AllowedSpec, TypeRegistry, DEFAULT_LOG_TYPES};

pub use timer::{TimerTable, DEFAULT_TIMER_LABEL};
