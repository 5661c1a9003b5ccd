//! Parsed allowed-logs strings

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which log types a `set_allowed` call enables
///
/// Grammar: `"all"` | `"none"` | `name("|"name)*`
///
/// ```
/// use loggr_core::registry::AllowedSpec;
///
/// let spec: AllowedSpec = "info|sql".parse().unwrap();
/// assert_eq!(spec, AllowedSpec::Only(vec!["info".into(), "sql".into()]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedSpec {
    /// Enable every known type
    All,
    /// Disable every known type
    None,
    /// Enable exactly these names (unknown ones are ignored)
    Only(Vec<String>),
}

impl AllowedSpec {
    /// Parse a spec string; never fails
    pub fn parse(spec: &str) -> Self {
        match spec {
            "all" => AllowedSpec::All,
            "none" => AllowedSpec::None,
            other => AllowedSpec::Only(
                other
                    .split('|')
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }
}

impl FromStr for AllowedSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for AllowedSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedSpec::All => write!(f, "all"),
            AllowedSpec::None => write!(f, "none"),
            AllowedSpec::Only(names) => write!(f, "{}", names.join("|")),
        }
    }
}
