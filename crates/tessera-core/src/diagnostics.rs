// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostics aggregation across all registered engines.
//!
//! [`collect`] walks the registry in registration order and flattens every
//! engine's diagnostic facts into one ordered sequence, prefixed with a
//! synthesized summary of the registry itself. The text and JSON render
//! paths iterate the same sequence, so ordering is identical across views.

use std::fmt;

use serde::Serialize;

use crate::registry::EngineRegistry;

/// Name of the synthesized registry summary fact.
pub const REGISTERED_ENGINES: &str = "Registered engines";

/// One named fact about current engine or system state.
///
/// The name is stable for a given logical fact; the value may change
/// between collections as state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticResult {
    name: String,
    value: String,
}

impl DiagnosticResult {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for DiagnosticResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Collect a point-in-time diagnostics report over all registered engines.
///
/// The first fact summarizes the registry (comma-joined engine names,
/// recomputed on every call). Engine contributions follow in registration
/// order; engines without a diagnostics provider contribute nothing.
/// Providers are infallible by contract -- an unavailable fact is encoded
/// in the value, never as a failure of the whole collection.
pub fn collect(registry: &EngineRegistry) -> Vec<DiagnosticResult> {
    let mut results = Vec::with_capacity(registry.len() + 1);
    results.push(DiagnosticResult::new(
        REGISTERED_ENGINES,
        registry.names().join(","),
    ));
    for engine in registry.iter() {
        results.extend(engine.diagnostics());
    }
    results
}

/// Render a report as line-oriented text, one `"<Name>: <Value>"` line per
/// fact, newline-terminated, in sequence order.
pub fn render_text(results: &[DiagnosticResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&result.to_string());
        out.push('\n');
    }
    out
}
