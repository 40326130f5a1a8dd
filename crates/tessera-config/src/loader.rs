// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./tessera.toml` > `~/.config/tessera/tessera.toml`
//! > `/etc/tessera/tessera.toml`, with environment variable overrides via the
//! `TESSERA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TesseraConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tessera/tessera.toml` (system-wide)
/// 3. `~/.config/tessera/tessera.toml` (user XDG config)
/// 4. `./tessera.toml` (local directory)
/// 5. `TESSERA_*` environment variables
pub fn load_config() -> Result<TesseraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TesseraConfig::default()))
        .merge(Toml::file("/etc/tessera/tessera.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("tessera/tessera.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("tessera.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TesseraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TesseraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// The standard lookup chain is skipped entirely. Used for testing and
/// explicit config file specification.
pub fn load_config_from_path(path: &Path) -> Result<TesseraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TesseraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `TESSERA_LOG_LEVEL` must map to `log.level`,
/// and a future `server.read_timeout` must not be split at every underscore.
fn env_provider() -> Env {
    Env::prefixed("TESSERA_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("app_", "app.", 1)
            .replacen("server_", "server.", 1)
            .replacen("log_", "log.", 1)
            .replacen("engines_", "engines.", 1);
        mapped.into()
    })
}
