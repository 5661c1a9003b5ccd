//! Error types

use thiserror::Error;

/// Errors that can occur while configuring or driving a logger
#[derive(Error, Debug)]
pub enum LoggrError {
    /// `timer_end` was called for a label that was never started
    #[error("Timer not started: {label}")]
    UnknownTimerLabel { label: String },

    /// The date layout contains specifiers that cannot be rendered
    #[error("Invalid date format: {layout}")]
    InvalidDateFormat { layout: String },

    /// IO error (reading a config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl LoggrError {
    /// Create an unknown timer label error
    pub fn unknown_timer(label: impl Into<String>) -> Self {
        Self::UnknownTimerLabel {
            label: label.into(),
        }
    }

    /// Create an invalid date format error
    pub fn invalid_date_format(layout: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            layout: layout.into(),
        }
    }
}

pub type LoggrResult<T> = Result<T, LoggrError>;
