//! Severity classification for weather alerts.
//!
//! The NWS feed labels alerts Minor, Moderate, Severe, Extreme or Unknown.
//! Only the first three get a dedicated display category, everything else
//! falls into `Unknown`.

use std::fmt;

/// Display category derived from an alert's severity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    Unknown,
}

impl Severity {
    /// Display class attached to a rendered alert (e.g. `severity-Minor`)
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Minor => "severity-Minor",
            Severity::Moderate => "severity-Moderate",
            Severity::Severe => "severity-Severe",
            Severity::Unknown => "severity-Unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a raw severity label to its display category.
///
/// Matching is exact and case-sensitive. Absent, empty and unrecognised
/// labels all map to [`Severity::Unknown`].
pub fn classify(severity: Option<&str>) -> Severity {
    match severity {
        Some("Minor") => Severity::Minor,
        Some("Moderate") => Severity::Moderate,
        Some("Severe") => Severity::Severe,
        _ => Severity::Unknown,
    }
}
