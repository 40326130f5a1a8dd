// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binary entry point for the Tessera framework.
//!
//! The command tree is assembled dynamically: the static `serve` and
//! `status` commands first, then every subcommand contributed by a
//! registered engine.

mod bootstrap;
mod logging;
mod serve;
mod status;

use std::sync::Arc;

use clap::{Arg, ArgAction, ArgMatches, Command};

use tessera_core::{EngineError, EngineRegistry};

#[tokio::main]
async fn main() {
    // Load and validate configuration before anything else.
    let config = match tessera_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            tessera_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let registry = Arc::new(bootstrap::build_registry(&config));
    let matches = cli(&registry).get_matches();

    let result = match matches.subcommand() {
        Some(("serve", _)) => serve::run_serve(&config, &registry).await,
        Some(("status", sub)) => {
            status::run_status(&config, sub.get_flag("json"), sub.get_flag("plain")).await
        }
        Some((name, sub)) => run_engine_command(&registry, name, sub),
        None => {
            println!("tessera: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Assemble the CLI: static commands plus every engine-contributed one.
fn cli(registry: &EngineRegistry) -> Command {
    let mut command = Command::new("tessera")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compose an application out of independently-authored engines")
        .subcommand(Command::new("serve").about("Start the HTTP server with every configured engine"))
        .subcommand(
            Command::new("status")
                .about("Check whether a running instance is reachable")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output machine-readable JSON"),
                )
                .arg(
                    Arg::new("plain")
                        .long("plain")
                        .action(ArgAction::SetTrue)
                        .help("Disable colored output"),
                ),
        );

    for engine_command in registry.commands() {
        command = command.subcommand(engine_command.clap().clone());
    }
    command
}

/// Run an engine-contributed subcommand.
///
/// The configure phase runs first so the command sees a fully configured
/// process; a failing hook surfaces its message to the caller.
fn run_engine_command(
    registry: &EngineRegistry,
    name: &str,
    matches: &ArgMatches,
) -> Result<(), EngineError> {
    registry.configure()?;
    registry
        .dispatch_command(name, matches)
        .unwrap_or_else(|| Err(EngineError::new(format!("unknown command `{name}`"), false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_config::TesseraConfig;

    #[test]
    fn cli_includes_static_and_engine_commands() {
        let registry = bootstrap::build_registry(&TesseraConfig::default());
        let command = cli(&registry);

        let names: Vec<&str> = command
            .get_subcommands()
            .map(|sub| sub.get_name())
            .collect();
        assert!(names.contains(&"serve"));
        assert!(names.contains(&"status"));
        assert!(names.contains(&"diagnostics"));
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config = tessera_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.app.name, "tessera");
    }

    #[test]
    fn unknown_engine_command_is_an_error() {
        let registry = EngineRegistry::new();
        let matches = Command::new("nope").get_matches_from(["nope"]);

        let err = run_engine_command(&registry, "nope", &matches).unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }
}
