//! Display surface that prints to the terminal as the core updates it.

use colored::Colorize;

use crate::core::{DisplaySurface, RenderedAlert};

use super::formatters::colored_severity_tag;
use super::prompts;

/// Console display surface used by `wxa alerts`
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    input: String,
    error_text: String,
    /// Print event/area under each headline
    long: bool,
}

impl ConsoleSurface {
    pub fn new(input: &str, long: bool) -> Self {
        Self {
            input: input.to_string(),
            error_text: String::new(),
            long,
        }
    }
}

impl DisplaySurface for ConsoleSurface {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn set_loading_visible(&mut self, visible: bool) {
        if visible {
            prompts::dimmed(&format!("Fetching alerts for {}...", self.input.trim()));
        }
    }

    fn set_error_text(&mut self, text: &str) {
        self.error_text = text.to_string();
    }

    fn set_error_visible(&mut self, visible: bool) {
        if visible && !self.error_text.is_empty() {
            prompts::error(&self.error_text);
        }
    }

    fn clear_alerts(&mut self) {}

    fn set_summary(&mut self, text: &str) {
        println!();
        prompts::bold(text);
    }

    fn set_alert_list(&mut self, items: Vec<RenderedAlert>) {
        for (index, item) in items.iter().enumerate() {
            println!(
                "{:>3}. {} {}",
                index + 1,
                colored_severity_tag(item.severity),
                item.text
            );

            if self.long {
                if let Some(detail) = &item.detail {
                    println!("       {}", detail.dimmed());
                }
            }
        }
    }
}
