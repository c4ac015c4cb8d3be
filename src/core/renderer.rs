use super::alert::{AlertCollection, AlertFeature};
use super::surface::{DisplaySurface, RenderedAlert};
use super::view_state::ViewStateController;

pub const NO_ALERTS_MESSAGE: &str = "No alerts for this state at the moment.";

/// Where an empty alert collection is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyRouting {
    /// Show [`NO_ALERTS_MESSAGE`] through the error channel
    #[default]
    ErrorChannel,
    /// Leave the error channel alone; the caller handles `RenderOutcome::Empty`
    Silent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Empty,
    Rendered(usize),
}

pub struct AlertRenderer<S: DisplaySurface> {
    views: ViewStateController<S>,
    empty_routing: EmptyRouting,
}

impl<S: DisplaySurface> Clone for AlertRenderer<S> {
    fn clone(&self) -> Self {
        Self {
            views: self.views.clone(),
            empty_routing: self.empty_routing,
        }
    }
}

impl<S: DisplaySurface> AlertRenderer<S> {
    pub fn new(views: ViewStateController<S>) -> Self {
        Self {
            views,
            empty_routing: EmptyRouting::default(),
        }
    }

    pub fn with_empty_routing(mut self, routing: EmptyRouting) -> Self {
        self.empty_routing = routing;
        self
    }

    /// Replace the rendered alerts with `collection`
    pub fn render(&self, collection: AlertCollection) -> RenderOutcome {
        self.views.surface().lock().clear_alerts();

        if collection.is_empty() {
            if self.empty_routing == EmptyRouting::ErrorChannel {
                self.views.display_error(NO_ALERTS_MESSAGE);
            }
            return RenderOutcome::Empty;
        }

        let count = collection.len();
        let items: Vec<RenderedAlert> = collection.features.iter().map(render_item).collect();

        let mut surface = self.views.surface().lock();
        surface.set_summary(&format!("Weather Alerts: {}", count));
        surface.set_alert_list(items);

        RenderOutcome::Rendered(count)
    }
}

fn render_item(feature: &AlertFeature) -> RenderedAlert {
    let props = &feature.properties;
    let detail = match (props.event.as_deref(), props.area_desc.as_deref()) {
        (Some(event), Some(area)) => Some(format!("{} - {}", event, area)),
        (Some(event), None) => Some(event.to_string()),
        (None, Some(area)) => Some(area.to_string()),
        (None, None) => None,
    };

    RenderedAlert {
        text: feature.display_text().to_string(),
        severity: feature.severity(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::Severity;
    use crate::core::surface::ViewState;

    fn renderer() -> (
        crate::core::surface::SharedSurface<ViewState>,
        AlertRenderer<ViewState>,
    ) {
        let surface = ViewState::shared();
        let views = ViewStateController::new(surface.clone());
        (surface, AlertRenderer::new(views))
    }

    #[tokio::test]
    async fn test_empty_collection_goes_to_error_channel() {
        let (surface, renderer) = renderer();

        let outcome = renderer.render(AlertCollection::default());

        assert_eq!(outcome, RenderOutcome::Empty);
        let state = surface.lock();
        assert_eq!(state.visible_error(), Some(NO_ALERTS_MESSAGE));
        assert!(state.summary.is_none());
        assert!(state.rendered_alerts.is_empty());
    }

    #[tokio::test]
    async fn test_silent_routing_leaves_error_channel_alone() {
        let (surface, renderer) = renderer();
        let renderer = renderer.with_empty_routing(EmptyRouting::Silent);

        let outcome = renderer.render(AlertCollection::default());

        assert_eq!(outcome, RenderOutcome::Empty);
        assert!(!surface.lock().error_visible);
    }

    #[tokio::test]
    async fn test_renders_summary_and_items_in_order() {
        let (surface, renderer) = renderer();
        let collection = AlertCollection {
            features: vec![
                AlertFeature::new("Tornado Warning", Some("Severe")),
                AlertFeature::new("Heat Advisory", Some("Moderate")),
                AlertFeature::new("Beach Hazards Statement", Some("Minor")),
                AlertFeature::new("Test Message", None),
            ],
        };

        let outcome = renderer.render(collection);

        assert_eq!(outcome, RenderOutcome::Rendered(4));
        let state = surface.lock();
        assert_eq!(state.summary.as_deref(), Some("Weather Alerts: 4"));

        let rendered: Vec<(&str, &str)> = state
            .rendered_alerts
            .iter()
            .map(|item| (item.text.as_str(), item.css_class()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Tornado Warning", "severity-Severe"),
                ("Heat Advisory", "severity-Moderate"),
                ("Beach Hazards Statement", "severity-Minor"),
                ("Test Message", "severity-Unknown"),
            ]
        );
    }

    #[tokio::test]
    async fn test_render_replaces_previous_content() {
        let (surface, renderer) = renderer();
        renderer.render(AlertCollection {
            features: vec![
                AlertFeature::new("Old one", Some("Minor")),
                AlertFeature::new("Old two", Some("Minor")),
            ],
        });

        renderer.render(AlertCollection::default());

        let state = surface.lock();
        assert!(state.summary.is_none());
        assert!(state.rendered_alerts.is_empty());
    }

    #[test]
    fn test_render_item_detail() {
        let mut feature = AlertFeature::new("Flood Watch", Some("Severe"));
        feature.properties.event = Some("Flood Watch".to_string());
        feature.properties.area_desc = Some("Leon; Wakulla".to_string());

        let item = render_item(&feature);
        assert_eq!(item.severity, Severity::Severe);
        assert_eq!(item.detail.as_deref(), Some("Flood Watch - Leon; Wakulla"));
    }
}
