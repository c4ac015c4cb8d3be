//! Loading indicator and error message control.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::surface::{DisplaySurface, SharedSurface};

/// Default time an error message stays visible
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// Drives the loading indicator and the error surface.
///
/// Cloning yields a handle to the same controller; the pending auto-hide
/// timer is shared between clones.
///
/// Every `display_error`/`clear_error` bumps the error generation while
/// holding the surface lock. A timer only hides the error if its generation
/// is still current, so a timer that already woke up cannot hide a newer
/// message even if `abort` reaches it too late.
pub struct ViewStateController<S: DisplaySurface> {
    surface: SharedSurface<S>,
    error_timer: Arc<Mutex<Option<JoinHandle<()>>>>,
    error_generation: Arc<AtomicU64>,
    error_duration: Duration,
}

impl<S: DisplaySurface> Clone for ViewStateController<S> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            error_timer: Arc::clone(&self.error_timer),
            error_generation: Arc::clone(&self.error_generation),
            error_duration: self.error_duration,
        }
    }
}

impl<S: DisplaySurface> ViewStateController<S> {
    pub fn new(surface: SharedSurface<S>) -> Self {
        Self::with_error_duration(surface, ERROR_DISPLAY_DURATION)
    }

    pub fn with_error_duration(surface: SharedSurface<S>, error_duration: Duration) -> Self {
        Self {
            surface,
            error_timer: Arc::new(Mutex::new(None)),
            error_generation: Arc::new(AtomicU64::new(0)),
            error_duration,
        }
    }

    pub fn surface(&self) -> &SharedSurface<S> {
        &self.surface
    }

    pub fn show_loading(&self) {
        self.surface.lock().set_loading_visible(true);
    }

    pub fn hide_loading(&self) {
        self.surface.lock().set_loading_visible(false);
    }

    /// Show `message` and hide it again after the error duration.
    ///
    /// A pending hide from an earlier call is replaced, so the message is
    /// hidden one full duration after the most recent call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn display_error(&self, message: &str) {
        log::debug!("displaying error: {}", message);
        let generation = {
            let mut surface = self.surface.lock();
            let generation = self.error_generation.fetch_add(1, Ordering::SeqCst) + 1;
            surface.set_error_text(message);
            surface.set_error_visible(true);
            generation
        };

        let surface = Arc::clone(&self.surface);
        let current = Arc::clone(&self.error_generation);
        let delay = self.error_duration;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut surface = surface.lock();
            if current.load(Ordering::SeqCst) == generation {
                surface.set_error_visible(false);
            }
        });

        if let Some(previous) = self.error_timer.lock().replace(timer) {
            previous.abort();
        }
    }

    /// Empty and hide the error surface now, cancelling any pending hide
    pub fn clear_error(&self) {
        if let Some(pending) = self.error_timer.lock().take() {
            pending.abort();
        }

        let mut surface = self.surface.lock();
        self.error_generation.fetch_add(1, Ordering::SeqCst);
        surface.set_error_text("");
        surface.set_error_visible(false);
    }
}
