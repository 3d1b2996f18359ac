//! Application-level utilities for the Sealpad CLI.
//!
//! - Application context for unified CLI + config handling
//! - Path resolution for config and vault files
//! - Password prompting and unlock retry

mod context;
mod password;
mod resolver;

pub use context::AppContext;
pub use password::read_new_password;
pub use resolver::resolve_config_path;
