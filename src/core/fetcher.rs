//! Request lifecycle for one alerts lookup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::client::AlertSource;
use super::renderer::{AlertRenderer, RenderOutcome};
use super::surface::DisplaySurface;
use super::view_state::ViewStateController;

/// How a single fetch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Alerts were rendered
    Rendered(usize),
    /// The request succeeded but the area has no active alerts
    Empty,
    /// The request or the response failed; carries the displayed message
    Failed(String),
    /// A newer fetch started before this one finished; nothing was shown
    Superseded,
}

impl FetchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

impl From<RenderOutcome> for FetchOutcome {
    fn from(outcome: RenderOutcome) -> Self {
        match outcome {
            RenderOutcome::Empty => FetchOutcome::Empty,
            RenderOutcome::Rendered(count) => FetchOutcome::Rendered(count),
        }
    }
}

/// Orchestrates loading state, the request, rendering and error display.
///
/// Each call takes a request token. A response is only applied when its
/// token is still the latest one issued.
pub struct AlertFetcher<S: DisplaySurface, C: AlertSource> {
    views: ViewStateController<S>,
    renderer: AlertRenderer<S>,
    source: Arc<C>,
    latest_token: Arc<AtomicU64>,
}

impl<S: DisplaySurface, C: AlertSource> Clone for AlertFetcher<S, C> {
    fn clone(&self) -> Self {
        Self {
            views: self.views.clone(),
            renderer: self.renderer.clone(),
            source: Arc::clone(&self.source),
            latest_token: Arc::clone(&self.latest_token),
        }
    }
}

impl<S: DisplaySurface, C: AlertSource> AlertFetcher<S, C> {
    pub fn new(views: ViewStateController<S>, renderer: AlertRenderer<S>, source: C) -> Self {
        Self {
            views,
            renderer,
            source: Arc::new(source),
            latest_token: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn views(&self) -> &ViewStateController<S> {
        &self.views
    }

    pub async fn fetch_alerts(&self, state: &str) -> FetchOutcome {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("fetch #{} for {}", token, state);

        self.views.show_loading();

        let result = self.source.fetch(state).await;

        if self.latest_token.load(Ordering::SeqCst) != token {
            log::debug!("fetch #{} for {} superseded, discarding response", token, state);
            return FetchOutcome::Superseded;
        }

        let outcome: FetchOutcome = match result {
            Ok(collection) => self.renderer.render(collection).into(),
            Err(e) => {
                let message = e.to_string();
                log::info!("fetch for {} failed: {}", state, message);
                self.views.display_error(&message);
                FetchOutcome::Failed(message)
            }
        };

        self.views.hide_loading();
        self.views.surface().lock().set_input_text("");

        outcome
    }
}
