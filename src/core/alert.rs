use serde::Deserialize;

use super::severity::{classify, Severity};

/// Parsed body of an `/alerts/active` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertCollection {
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertProperties {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default, rename = "areaDesc")]
    pub area_desc: Option<String>,
}

impl AlertCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl AlertFeature {
    /// Convenience constructor, mostly for tests and fixtures
    pub fn new(headline: &str, severity: Option<&str>) -> Self {
        Self {
            properties: AlertProperties {
                headline: Some(headline.to_string()),
                severity: severity.map(str::to_string),
                ..Default::default()
            },
        }
    }

    /// Text shown for the alert: the headline, or the event name when the
    /// feed publishes a null headline
    pub fn display_text(&self) -> &str {
        self.properties
            .headline
            .as_deref()
            .or(self.properties.event.as_deref())
            .unwrap_or_default()
    }

    pub fn severity(&self) -> Severity {
        classify(self.properties.severity.as_deref())
    }
}
