//! Log type table

use std::collections::HashMap;

use super::spec::AllowedSpec;

/// Log types every registry starts with
pub const DEFAULT_LOG_TYPES: &[&str] = &[
    "info", "error", "warning", "notice", "fatal", "debug", "sql", "timer",
];

/// Log types enabled on a fresh registry
pub const DEFAULT_ENABLED: &[&str] = &["info", "error", "fatal"];

/// Table of known log type names and whether each one prints
///
/// Names are stored exactly as given; lookups are case-sensitive.
/// A name that was never registered is simply disabled.
///
/// # Example
///
/// ```
/// use loggr_core::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// registry.register_custom_type("audit");
/// registry.set_allowed("info|audit");
///
/// assert!(registry.is_enabled("audit"));
/// assert!(!registry.is_enabled("error"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    /// Registration order
    order: Vec<String>,
    flags: HashMap<String, bool>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry with the default types, `info`, `error` and `fatal` enabled
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for name in DEFAULT_LOG_TYPES {
            registry.register_custom_type(name);
        }
        for name in DEFAULT_ENABLED {
            registry.flags.insert(name.to_string(), true);
        }
        registry
    }

    /// Create a registry that knows no types at all
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            flags: HashMap::new(),
        }
    }

    /// Register a custom log type; it starts disabled
    ///
    /// Registering a name that is already known keeps its current flag.
    pub fn register_custom_type(&mut self, name: &str) {
        if self.flags.contains_key(name) {
            return;
        }
        self.order.push(name.to_string());
        self.flags.insert(name.to_string(), false);
    }

    /// Apply an allowed-logs string (`all`, `none` or `a|b|c`)
    ///
    /// Returns the tokens that did not name a known type. They are otherwise ignored.
    pub fn set_allowed(&mut self, spec: &str) -> Vec<String> {
        self.apply(&AllowedSpec::parse(spec))
    }

    /// Apply an already parsed spec
    pub fn apply(&mut self, spec: &AllowedSpec) -> Vec<String> {
        match spec {
            AllowedSpec::All => {
                self.reset(true);
                Vec::new()
            }
            AllowedSpec::None => {
                self.reset(false);
                Vec::new()
            }
            AllowedSpec::Only(names) => {
                self.reset(false);
                let mut ignored = Vec::new();
                for name in names {
                    match self.flags.get_mut(name) {
                        Some(flag) => *flag = true,
                        None => ignored.push(name.clone()),
                    }
                }
                ignored
            }
        }
    }

    /// Whether a log type currently prints
    pub fn is_enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Whether a log type has been registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// All known types, in registration order
    pub fn known_types(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Enabled types, in registration order
    pub fn enabled_types(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|name| self.is_enabled(name))
            .cloned()
            .collect()
    }

    fn reset(&mut self, value: bool) {
        for flag in self.flags.values_mut() {
            *flag = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let registry = TypeRegistry::new();
        assert!(registry.is_enabled("info"));
        assert!(registry.is_enabled("error"));
        assert!(registry.is_enabled("fatal"));
        assert!(!registry.is_enabled("debug"));
        assert!(!registry.is_enabled("timer"));
        assert_eq!(registry.known_types(), DEFAULT_LOG_TYPES);
        assert_eq!(registry.enabled_types(), vec!["info", "error", "fatal"]);
    }

    #[test]
    fn test_all_enables_custom_types_too() {
        let mut registry = TypeRegistry::new();
        registry.register_custom_type("audit");
        registry.set_allowed("all");

        for name in registry.known_types() {
            assert!(registry.is_enabled(&name), "{} should be enabled", name);
        }
        assert!(registry.is_enabled("audit"));
    }

    #[test]
    fn test_none_disables_everything() {
        let mut registry = TypeRegistry::new();
        registry.register_custom_type("audit");
        registry.set_allowed("all");
        registry.set_allowed("none");

        for name in registry.known_types() {
            assert!(!registry.is_enabled(&name));
        }
        assert!(registry.enabled_types().is_empty());
    }

    #[test]
    fn test_pipe_list_enables_exactly_named() {
        let mut registry = TypeRegistry::new();
        let ignored = registry.set_allowed("info|sql");

        assert!(ignored.is_empty());
        assert!(registry.is_enabled("info"));
        assert!(registry.is_enabled("sql"));
        assert!(!registry.is_enabled("error"));
        assert!(!registry.is_enabled("fatal"));
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let mut registry = TypeRegistry::new();
        let ignored = registry.set_allowed("bogus|info");

        assert_eq!(ignored, vec!["bogus".to_string()]);
        assert!(registry.is_enabled("info"));
        assert!(!registry.is_enabled("bogus"));
        assert!(!registry.is_registered("bogus"));
    }

    #[test]
    fn test_custom_type_starts_disabled() {
        let mut registry = TypeRegistry::new();
        registry.register_custom_type("audit");

        assert!(registry.is_registered("audit"));
        assert!(!registry.is_enabled("audit"));

        registry.set_allowed("audit");
        assert!(registry.is_enabled("audit"));
        assert!(!registry.is_enabled("info"));
    }

    #[test]
    fn test_custom_type_registered_after_spec_is_not_enabled() {
        let mut registry = TypeRegistry::new();
        registry.set_allowed("audit");
        registry.register_custom_type("audit");

        assert!(!registry.is_enabled("audit"));

        // A later pass sees it
        registry.set_allowed("audit");
        assert!(registry.is_enabled("audit"));
    }

    #[test]
    fn test_reregistering_keeps_flag() {
        let mut registry = TypeRegistry::new();
        registry.register_custom_type("info");

        assert!(registry.is_enabled("info"));
        assert_eq!(registry.known_types().len(), DEFAULT_LOG_TYPES.len());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut registry = TypeRegistry::new();
        registry.set_allowed("INFO");

        assert!(!registry.is_enabled("info"));
        assert!(!registry.is_enabled("INFO"));
    }

    #[test]
    fn test_empty_registry() {
        let mut registry = TypeRegistry::empty();
        assert!(registry.known_types().is_empty());
        assert_eq!(registry.set_allowed("info"), vec!["info".to_string()]);
        assert!(!registry.is_enabled("info"));
    }
}
