//! Environment overrides

use super::file::LoggrConfig;

/// Allowed-logs spec, replaces `allowed`
pub const ENV_ALLOWED: &str = "LOGGR_ALLOWED";

/// Comma-separated custom types, appended to `custom`
pub const ENV_CUSTOM: &str = "LOGGR_CUSTOM";

/// strftime layout, replaces `date_format`
pub const ENV_DATE_FORMAT: &str = "LOGGR_DATE_FORMAT";

impl LoggrConfig {
    /// Default config with the process environment applied
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Apply `LOGGR_*` variables from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply `LOGGR_*` variables from any lookup
    pub fn apply_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(allowed) = lookup(ENV_ALLOWED) {
            self.allowed = Some(allowed);
        }
        if let Some(custom) = lookup(ENV_CUSTOM) {
            for name in custom.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                if !self.custom.iter().any(|c| c == name) {
                    self.custom.push(name.to_string());
                }
            }
        }
        if let Some(layout) = lookup(ENV_DATE_FORMAT) {
            self.date_format = Some(layout);
            self.reference_layout = false;
        }
        self
    }
}
