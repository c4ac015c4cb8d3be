use colored::{ColoredString, Colorize};

use crate::core::Severity;

/// Severity tag for console output, e.g. `[Severe]`
pub fn severity_tag(severity: Severity) -> String {
    format!("[{}]", severity.label())
}

/// Colored severity tag
pub fn colored_severity_tag(severity: Severity) -> ColoredString {
    let tag = severity_tag(severity);
    match severity {
        Severity::Severe => tag.red().bold(),
        Severity::Moderate => tag.yellow().bold(),
        Severity::Minor => tag.cyan(),
        Severity::Unknown => tag.dimmed(),
    }
}
