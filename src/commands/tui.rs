//! Interactive alerts command handler.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::{normalize_state, Config};
use crate::ui::alerts_tui::run_alerts_app;

/// Execute the interactive TUI command
pub fn execute(matches: Option<&ArgMatches>) -> Result<()> {
    let config = Config::load()?;

    let initial_state = matches
        .and_then(|m| m.get_one::<String>("state"))
        .and_then(|s| normalize_state(s))
        .or_else(|| config.default_state.clone());

    run_alerts_app(config, initial_state).context("Failed to run alerts UI")
}
