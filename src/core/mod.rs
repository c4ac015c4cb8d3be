// Core alerts logic, independent of any display host

pub mod alert;
pub mod client;
pub mod config;
pub mod fetcher;
pub mod input;
pub mod renderer;
pub mod severity;
pub mod surface;
pub mod view_state;

// Re-export commonly used items
pub use alert::{AlertCollection, AlertFeature, AlertProperties};
pub use client::{AlertSource, NwsClient};
pub use config::Config;
pub use fetcher::{AlertFetcher, FetchOutcome};
pub use input::{normalize_state, InputBinding, InputKey, EMPTY_INPUT_MESSAGE};
pub use renderer::{AlertRenderer, EmptyRouting, RenderOutcome, NO_ALERTS_MESSAGE};
pub use severity::{classify, Severity};
pub use surface::{DisplaySurface, RenderedAlert, SharedSurface, ViewState};
pub use view_state::{ViewStateController, ERROR_DISPLAY_DURATION};

/// Wire the controller, renderer, fetcher and binding for one surface
pub fn build_binding<S: DisplaySurface, C: AlertSource>(
    surface: SharedSurface<S>,
    source: C,
    config: &Config,
    empty_routing: EmptyRouting,
) -> InputBinding<S, C> {
    let views = ViewStateController::with_error_duration(surface, config.error_timeout());
    let renderer = AlertRenderer::new(views.clone()).with_empty_routing(empty_routing);
    InputBinding::new(AlertFetcher::new(views, renderer, source))
}
