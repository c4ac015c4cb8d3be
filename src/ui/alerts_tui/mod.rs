//! Terminal User Interface for weather alerts.
//!
//! Hosts the alerts core on an in-memory display surface drawn with ratatui.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_alerts_app, AlertsApp};
pub use event_handler::{map_key, AlertsEvent, Focus};
