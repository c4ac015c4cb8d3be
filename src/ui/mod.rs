// UI and formatting module

pub mod alerts_tui;
pub mod console;
pub mod formatters;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use console::ConsoleSurface;
pub use formatters::{colored_severity_tag, severity_tag};
pub use prompts::{bold, dimmed, error, info, success};
