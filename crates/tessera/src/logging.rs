// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in logging engine.
//!
//! Installs the tracing subscriber during configure, using the level and
//! format from configuration, and reports the active verbosity as a
//! diagnostic fact.

use tessera_config::model::{LogConfig, LogFormat};
use tessera_core::{DiagnosticResult, Engine, EngineError};
use tracing_subscriber::EnvFilter;

/// Create the logging engine from the `[log]` configuration section.
pub fn logging_engine(config: &LogConfig) -> Engine {
    let level = config.level.clone();
    let format = config.format;
    let verbosity = config.level.clone();

    Engine::new("Logging")
        .with_configure(move || init_tracing(&level, format))
        .with_diagnostics(move || {
            vec![DiagnosticResult::new("Logger verbosity", verbosity.clone())]
        })
}

/// Install the global tracing subscriber.
///
/// Runs once per process as part of the configure phase; a second
/// installation attempt is a configuration failure.
fn init_tracing(level: &str, format: LogFormat) -> Result<(), EngineError> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| EngineError::with_source(format!("invalid log level `{level}`"), false, e))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    result
        .map_err(|e| EngineError::with_source("failed to install tracing subscriber", false, e))
}
