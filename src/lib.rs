// WXA Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, WxaError};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;

// Initialize logging
//
// Defaults to warnings only so log output does not scribble over the TUI;
// use RUST_LOG=wxa=debug to see request traces.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
