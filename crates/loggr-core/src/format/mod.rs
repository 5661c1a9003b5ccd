//! Rendering helpers for timestamps and elapsed times

pub mod date;
mod duration;

pub use date::{DateFormat, DEFAULT_DATE_FORMAT};
pub use duration::format_duration;
