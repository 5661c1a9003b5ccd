//! Process-wide default logger
//!
//! A lazily created `Loggr` writing to stdout. It reads `LOGGR_ALLOWED`,
//! `LOGGR_CUSTOM` and `LOGGR_DATE_FORMAT` once, on first use; the setters
//! below change it afterwards.
//!
//! Configure it once at startup, before other threads start logging, so
//! every thread sees the same enabled set.

use std::time::Duration;

use once_cell::sync::Lazy;

use super::loggr::{Loggr, LINE};
use crate::config::LoggrConfig;
use crate::error::LoggrResult;

/// Global logger instance
static DEFAULT: Lazy<Loggr> = Lazy::new(|| Loggr::from_config(&LoggrConfig::from_env()));

/// The process-wide logger
pub fn default_logger() -> &'static Loggr {
    &DEFAULT
}

/// Enable log types on the default logger: `"all"`, `"none"` or `a|b|c`
pub fn set_allowed_logs(spec: &str) {
    DEFAULT.set_allowed_logs(spec);
}

/// Register a custom log type; call before the `set_allowed_logs` that enables it
pub fn set_custom_log(name: &str) {
    DEFAULT.set_custom_log(name);
}

/// Replace the default logger's timestamp layout (strftime)
pub fn set_date_format(layout: &str) {
    DEFAULT.set_date_format(layout);
}

pub fn info(text: &str) {
    DEFAULT.info(text);
}

pub fn error(text: &str) {
    DEFAULT.error(text);
}

pub fn warning(text: &str) {
    DEFAULT.warning(text);
}

pub fn notice(text: &str) {
    DEFAULT.notice(text);
}

pub fn debug(text: &str) {
    DEFAULT.debug(text);
}

pub fn fatal(text: &str) {
    DEFAULT.fatal(text);
}

/// Log a query
pub fn sql(query: &str) {
    DEFAULT.sql(query);
}

/// Log with a custom type
pub fn custom(log_type: &str, text: &str) {
    DEFAULT.custom(log_type, text);
}

/// 80-character `=` separator
pub fn line() -> &'static str {
    LINE
}

/// Start a timer on the default logger; `None` means `"default"`
pub fn time_start(label: Option<&str>) {
    DEFAULT.timer_start(label);
}

/// Print the elapsed time of a timer on the default logger
pub fn time_end(label: Option<&str>) -> LoggrResult<Option<Duration>> {
    DEFAULT.timer_end(label)
}
