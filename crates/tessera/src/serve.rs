// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tessera serve` command implementation.
//!
//! Runs the configure phase over the frozen registry, then starts the
//! gateway with every engine's contributed routes. A configure failure
//! aborts startup with the failing engine's error, unmodified.

use std::sync::Arc;

use tessera_config::TesseraConfig;
use tessera_core::{EngineError, EngineRegistry};
use tessera_gateway::ServerConfig;
use tracing::info;

/// Run the `tessera serve` command.
pub async fn run_serve(
    config: &TesseraConfig,
    registry: &Arc<EngineRegistry>,
) -> Result<(), EngineError> {
    registry.configure()?;
    info!(engines = %registry.names().join(","), "engines configured");

    tessera_prometheus::set_registered_engines(registry.len() as f64);

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    tessera_gateway::start_server(&server_config, registry).await
}
