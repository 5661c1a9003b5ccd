//! Logging abstractions and the leveled `Loggr`

mod traits;
mod noop;
mod console;
mod buffer;
mod loggr;
pub mod global;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use buffer::BufferWriter;
pub use loggr::{Loggr, LINE, TIMER_LOG_TYPE};

// Re-export the process-wide functions for convenience
pub use global::{
    default_logger, set_allowed_logs, set_custom_log, set_date_format,
    info, error, warning, notice, debug, fatal, sql, custom,
    line, time_start, time_end,
};
