//! UI primitives for the Sealpad CLI.
//!
//! - **Context**: environment detection (TTY, color, unicode)
//! - **Render**: badges, key-value lines, summary tables, errors
//! - **Progress**: a spinner shown while the key derivation runs

mod context;
pub mod progress;
pub mod render;

pub use context::UiContext;
pub use render::{badge, hint, kv, print_error, Badge};
