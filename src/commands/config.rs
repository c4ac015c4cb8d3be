use crate::core::Config;
use crate::ui::prompts;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("set", sub_matches)) => set(sub_matches),
        Some(("reset", _)) => reset(),
        Some(("path", _)) => {
            println!("{}", Config::get_config_path()?.display());
            Ok(())
        }
        _ => {
            println!("Use 'wxa config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;

    prompts::bold("Current configuration:");
    println!("  {} {}", "api-url:      ".cyan(), config.api_url);
    println!("  {} {}", "user-agent:   ".cyan(), config.user_agent);
    println!("  {} {} ms", "error-timeout:".cyan(), config.error_timeout_ms);
    println!(
        "  {} {}",
        "default-state:".cyan(),
        config
            .default_state
            .as_deref()
            .unwrap_or("(none)")
            .dimmed()
    );

    Ok(())
}

fn set(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    let mut config = Config::load()?;
    config.set_value(key, value)?;
    config.save().context("Failed to save configuration")?;

    log::info!("config {} updated", key);
    prompts::success(&format!("✓ {} = {}", key, value));
    Ok(())
}

fn reset() -> Result<()> {
    Config::default()
        .save()
        .context("Failed to save configuration")?;
    prompts::success("✓ Configuration reset to defaults");
    Ok(())
}
