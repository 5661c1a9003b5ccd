//! File-based logger configuration (YAML)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoggrError, LoggrResult};
use crate::format::DateFormat;

/// Logger configuration
///
/// ```yaml
/// allowed: "info|error|audit"
/// custom: [audit]
/// date_format: "%d/%m/%Y %H:%M"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggrConfig {
    /// Allowed-logs spec (`all`, `none` or `a|b|c`); `None` keeps the defaults
    pub allowed: Option<String>,

    /// Custom log types, registered before `allowed` is applied
    pub custom: Vec<String>,

    /// Timestamp layout; `None` keeps `%Y-%m-%d %H:%M:%S`
    pub date_format: Option<String>,

    /// Treat `date_format` as a reference-date layout (`2006-01-02 15:04:05`)
    pub reference_layout: bool,
}

impl LoggrConfig {
    /// Load config from a YAML file; a missing file yields the default config
    pub fn load(path: impl AsRef<Path>) -> LoggrResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> LoggrResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| LoggrError::Yaml(format!("Failed to parse YAML: {}", e)))
    }

    /// User-level config path (~/.config/loggr/config.yaml)
    pub fn user_path() -> PathBuf {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("loggr").join("config.yaml")
    }

    /// Workspace-level config path (.config/loggr/config.yaml)
    pub fn workspace_path(workspace_root: impl AsRef<Path>) -> PathBuf {
        workspace_root
            .as_ref()
            .join(".config")
            .join("loggr")
            .join("config.yaml")
    }

    /// Overlay another config: its set fields win, custom types are appended
    pub fn merge(mut self, other: LoggrConfig) -> Self {
        if other.allowed.is_some() {
            self.allowed = other.allowed;
        }
        if other.date_format.is_some() {
            self.date_format = other.date_format;
            self.reference_layout = other.reference_layout;
        }
        for name in other.custom {
            if !self.custom.contains(&name) {
                self.custom.push(name);
            }
        }
        self
    }

    /// The configured timestamp layout, validated
    pub fn resolve_date_format(&self) -> LoggrResult<Option<DateFormat>> {
        match &self.date_format {
            None => Ok(None),
            Some(layout) if self.reference_layout => {
                DateFormat::from_reference_layout(layout).map(Some)
            }
            Some(layout) => DateFormat::parse(layout).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = LoggrConfig::load(dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, LoggrConfig::default());
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "allowed: \"info|audit\"\ncustom:\n  - audit\ndate_format: \"%H:%M\"\n",
        )
        .unwrap();

        let config = LoggrConfig::load(&path).unwrap();
        assert_eq!(config.allowed.as_deref(), Some("info|audit"));
        assert_eq!(config.custom, vec!["audit".to_string()]);
        assert_eq!(config.date_format.as_deref(), Some("%H:%M"));
        assert!(!config.reference_layout);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            LoggrConfig::from_yaml("custom: {not: [a list"),
            Err(LoggrError::Yaml(_))
        ));
    }

    #[test]
    fn test_workspace_path() {
        let path = LoggrConfig::workspace_path("/work");
        assert!(path.ends_with(".config/loggr/config.yaml"));
        assert!(path.starts_with("/work"));
    }

    #[test]
    fn test_user_path() {
        assert!(LoggrConfig::user_path().ends_with("loggr/config.yaml"));
    }

    #[test]
    fn test_merge() {
        let base = LoggrConfig {
            allowed: Some("info".to_string()),
            custom: vec!["audit".to_string()],
            date_format: Some("%H".to_string()),
            reference_layout: false,
        };
        let overlay = LoggrConfig {
            allowed: None,
            custom: vec!["audit".to_string(), "billing".to_string()],
            date_format: Some("15:04".to_string()),
            reference_layout: true,
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.allowed.as_deref(), Some("info"));
        assert_eq!(merged.custom, vec!["audit", "billing"]);
        assert_eq!(
            merged.resolve_date_format().unwrap().unwrap().layout(),
            "%H:%M"
        );
    }

    #[test]
    fn test_resolve_invalid_date_format() {
        let config = LoggrConfig {
            date_format: Some("%Q".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_date_format().is_err());
        assert!(LoggrConfig::default().resolve_date_format().unwrap().is_none());
    }
}
