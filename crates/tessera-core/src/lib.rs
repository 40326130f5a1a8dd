// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Tessera engine framework.
//!
//! Tessera composes an application out of independently-authored engines:
//! named bundles of optional configure, route, CLI-command, and diagnostics
//! capabilities. This crate provides the engine model, the ordered registry
//! that drives the shared lifecycle, diagnostics aggregation, and the
//! classified error type used throughout.

pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod registry;
pub mod routing;

// Re-export key items at crate root for ergonomic imports.
pub use diagnostics::{DiagnosticResult, REGISTERED_ENGINES, collect, render_text};
pub use engine::{Engine, EngineCommand};
pub use error::EngineError;
pub use registry::EngineRegistry;
pub use routing::RouteRegistrar;
