// Command handlers module
pub mod alerts;
pub mod config;
pub mod tui;
pub mod version;

// Re-exports for cleaner imports
pub use alerts::execute as alerts;
pub use config::execute as config;
pub use tui::execute as tui;
pub use version::execute as version;
