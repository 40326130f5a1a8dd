// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tessera status` command implementation.
//!
//! Probes the status endpoint of a running instance to report whether it
//! is reachable. Falls back gracefully when nothing is listening.

use std::io::IsTerminal;
use std::time::Duration;

use serde::Serialize;

use tessera_config::TesseraConfig;
use tessera_core::EngineError;

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub running: bool,
    pub endpoint: String,
}

/// Run the `tessera status` command.
///
/// If `--json` is passed, outputs structured JSON for scripting.
/// If `--plain` is passed or stdout is not a TTY, disables colors.
pub async fn run_status(config: &TesseraConfig, json: bool, plain: bool) -> Result<(), EngineError> {
    let host = &config.server.host;
    let port = config.server.port;
    let url = format!("http://{host}:{port}/status");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
        .map_err(|e| EngineError::with_source("failed to create HTTP client", false, e))?;

    let running = match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            resp.text().await.map(|body| body == "OK").unwrap_or(false)
        }
        _ => false,
    };

    if json {
        let response = StatusResponse {
            running,
            endpoint: url,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        if running {
            print_status_running(&url, use_color);
        } else {
            print_status_offline(&url, use_color);
        }
    }

    Ok(())
}

fn print_status_running(url: &str, use_color: bool) {
    println!();
    println!("  tessera status");
    println!("  {}", "-".repeat(35));

    if use_color {
        use colored::Colorize;
        println!("    State:    {} {}", "✓".green(), "running".green());
    } else {
        println!("    State:    [OK] running");
    }

    println!("    Endpoint: {url}");
    println!();
}

fn print_status_offline(url: &str, use_color: bool) {
    println!();
    println!("  tessera status");
    println!("  {}", "-".repeat(35));

    if use_color {
        use colored::Colorize;
        println!("    State:    {} {}", "✗".red(), "not running".red());
    } else {
        println!("    State:    [FAIL] not running");
    }

    println!("    Endpoint: {url}");
    println!();
    println!("  Start with: tessera serve");
    println!();
}
