//! One-shot alerts lookup printed to the console.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ArgMatches;
use parking_lot::Mutex;

use crate::core::{build_binding, Config, EmptyRouting, FetchOutcome, NwsClient};
use crate::ui::{prompts, ConsoleSurface};

/// Execute the alerts command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;

    let state = matches
        .get_one::<String>("state")
        .cloned()
        .or_else(|| config.default_state.clone())
        .unwrap_or_default();
    let long = matches.get_flag("long");

    let client = NwsClient::from_config(&config).context("Failed to create alerts client")?;
    let surface = Arc::new(Mutex::new(ConsoleSurface::new(&state, long)));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let outcome = runtime.block_on(async {
        let binding = build_binding(surface, client, &config, EmptyRouting::Silent);
        binding.activate().await
    });

    // Failure messages were already printed by the console surface
    let Some(outcome) = outcome else {
        std::process::exit(1);
    };
    if outcome.is_failure() {
        std::process::exit(1);
    }

    match outcome {
        FetchOutcome::Empty => prompts::info(crate::core::NO_ALERTS_MESSAGE),
        FetchOutcome::Rendered(count) => log::debug!("{} alerts printed", count),
        FetchOutcome::Failed(_) | FetchOutcome::Superseded => {}
    }
    Ok(())
}
