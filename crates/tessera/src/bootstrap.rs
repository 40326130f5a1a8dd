// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry assembly for the Tessera binary.
//!
//! Builds the engine registry from configuration during the
//! single-threaded initialization phase. After [`build_registry`] returns,
//! the caller freezes the registry into an `Arc`, runs configure once, and
//! only then starts serving.

use tessera_config::TesseraConfig;
use tessera_core::EngineRegistry;
use tessera_gateway::status_engine;
use tessera_prometheus::metrics_engine;
use tracing::{debug, warn};

use crate::logging::logging_engine;

/// Names of the engines compiled into this binary, in registration order.
pub const BUILTIN_ENGINES: &[&str] = &["Status", "Logging", "Metrics"];

/// Build the registry with every built-in engine not disabled by
/// configuration.
pub fn build_registry(config: &TesseraConfig) -> EngineRegistry {
    for name in &config.engines.disabled {
        if !BUILTIN_ENGINES.contains(&name.as_str()) {
            warn!(engine = %name, "unknown engine name in engines.disabled");
        }
    }

    let mut registry = EngineRegistry::new();
    let builtins = [
        status_engine(),
        logging_engine(&config.log),
        metrics_engine(),
    ];
    for engine in builtins {
        if config.engines.disabled.iter().any(|d| d == engine.name()) {
            debug!(engine = engine.name(), "engine disabled by configuration");
            continue;
        }
        registry.register(engine);
    }
    registry
}
