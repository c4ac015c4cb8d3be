//! Binds user actions to the fetch orchestrator.

use super::client::AlertSource;
use super::fetcher::{AlertFetcher, FetchOutcome};
use super::surface::DisplaySurface;
use crate::error::WxaError;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a state abbreviation.";

/// Host-independent key identity, only what the binding cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Enter,
    Other,
}

/// Trim surrounding whitespace and upper-case; `None` when nothing is left
pub fn normalize_state(raw: &str) -> Option<String> {
    let state = raw.trim().to_uppercase();
    (!state.is_empty()).then_some(state)
}

pub struct InputBinding<S: DisplaySurface, C: AlertSource> {
    fetcher: AlertFetcher<S, C>,
}

impl<S: DisplaySurface, C: AlertSource> Clone for InputBinding<S, C> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
        }
    }
}

impl<S: DisplaySurface, C: AlertSource> InputBinding<S, C> {
    pub fn new(fetcher: AlertFetcher<S, C>) -> Self {
        Self { fetcher }
    }

    /// The fetch action (button press).
    ///
    /// Returns `None` when the input was empty and no request was made.
    pub async fn activate(&self) -> Option<FetchOutcome> {
        let views = self.fetcher.views();
        views.clear_error();

        let raw = views.surface().lock().input_text();
        let Some(state) = normalize_state(&raw) else {
            let err = WxaError::validation(EMPTY_INPUT_MESSAGE);
            log::debug!("not fetching: {}", err);
            views.display_error(&err.to_string());
            return None;
        };

        Some(self.fetcher.fetch_alerts(&state).await)
    }

    /// Key press while the input has focus. Enter simulates activation;
    /// any other key is left to the host.
    pub async fn handle_key(&self, key: InputKey) -> Option<FetchOutcome> {
        match key {
            InputKey::Enter => self.activate().await,
            InputKey::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_state() {
        assert_eq!(normalize_state(" fl "), Some("FL".to_string()));
        assert_eq!(normalize_state("Tx"), Some("TX".to_string()));
        assert_eq!(normalize_state("\tca\n"), Some("CA".to_string()));
        assert_eq!(normalize_state(""), None);
        assert_eq!(normalize_state("   "), None);
    }
}
