use anyhow::Result;
use clap::{Arg, Command};

use wxa::commands;

fn build_cli() -> Command {
    Command::new("wxa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Active US weather alerts from the National Weather Service")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("tui")
                .about("Interactive alerts viewer (default when no command is given)")
                .arg(
                    Arg::new("state")
                        .short('s')
                        .long("state")
                        .value_name("STATE")
                        .help("Pre-fill the state abbreviation"),
                ),
        )
        .subcommand(
            Command::new("alerts")
                .about("Print active alerts for a state and exit")
                .arg(
                    Arg::new("state")
                        .help("Two-letter state abbreviation (defaults to the configured default-state)")
                        .index(1),
                )
                .arg(
                    Arg::new("long")
                        .short('l')
                        .long("long")
                        .help("Show event name and affected areas under each alert")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'wxa config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .arg(
                            Arg::new("key")
                                .help("One of: api-url, user-agent, error-timeout, default-state")
                                .required(true)
                                .value_parser(wxa::core::config::CONFIG_KEYS)
                                .index(1),
                        )
                        .arg(
                            Arg::new("value")
                                .help("New value")
                                .required(true)
                                .index(2),
                        ),
                )
                .subcommand(Command::new("reset").about("Restore default configuration"))
                .subcommand(Command::new("path").about("Print the configuration file path")),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    wxa::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("tui", sub_matches)) => commands::tui(Some(sub_matches)),
        Some(("alerts", sub_matches)) => commands::alerts(sub_matches),
        Some(("config", sub_matches)) => commands::config(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => commands::tui(None),
    }
}
