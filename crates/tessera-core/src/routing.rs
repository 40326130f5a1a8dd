// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The route-registration capability engines contribute HTTP endpoints
//! through.
//!
//! Engines never see the server's dispatch tables; they are handed a
//! [`RouteRegistrar`] exactly once and call it for each endpoint they
//! declare. The gateway implements this over an `axum::Router`; tests use
//! recording mocks.

use axum::routing::MethodRouter;

/// Narrow interface for registering a handler at a path.
///
/// The verb is carried by the [`MethodRouter`] (`axum::routing::get(...)`,
/// `post(...)` and friends), mirroring how the router itself composes
/// method-specific handlers. Route registration has no failure channel --
/// an engine that needs to fail must do so during configure.
pub trait RouteRegistrar {
    /// Register `handler` for requests to `path`.
    fn route(&mut self, path: &str, handler: MethodRouter);
}
