//! Logger configuration
//!
//! Sources, applied in this order by callers:
//! - YAML file: user level (`~/.config/loggr/config.yaml`) or workspace level
//!   (`.config/loggr/config.yaml`)
//! - Environment: `LOGGR_ALLOWED`, `LOGGR_CUSTOM`, `LOGGR_DATE_FORMAT`

mod env;
mod file;

pub use env::{ENV_ALLOWED, ENV_CUSTOM, ENV_DATE_FORMAT};
pub use file::LoggrConfig;
