//! Log type registry
//!
//! Tracks which log type names are known and which of them currently print.
//! - `TypeRegistry`: name to enabled-flag table, default and custom types
//! - `AllowedSpec`: parsed form of an allowed-logs string (`all`, `none`, `a|b|c`)

mod spec;
mod types;

pub use spec::AllowedSpec;
pub use types::{TypeRegistry, DEFAULT_ENABLED, DEFAULT_LOG_TYPES};
