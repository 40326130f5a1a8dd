// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The gateway's implementation of the route-registration capability.
//!
//! Adapts `axum::Router` (which consumes `self` on every `route` call) to
//! the `&mut`-style [`RouteRegistrar`] interface engines are handed.

use axum::Router;
use axum::routing::MethodRouter;

use tessera_core::RouteRegistrar;

/// Collects engine-contributed routes into an `axum::Router`.
#[derive(Debug, Default)]
pub struct AppRouter {
    inner: Router,
}

impl AppRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish collection and hand back the assembled router.
    pub fn into_router(self) -> Router {
        self.inner
    }
}

impl RouteRegistrar for AppRouter {
    fn route(&mut self, path: &str, handler: MethodRouter) {
        let inner = std::mem::take(&mut self.inner);
        self.inner = inner.route(path, handler);
    }
}
