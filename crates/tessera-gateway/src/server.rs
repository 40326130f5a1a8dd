// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Assembles the router by driving every registered engine's route hook,
//! adds middleware layers, and serves until shutdown.

use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tessera_core::{EngineError, EngineRegistry};

use crate::router::AppRouter;

/// Gateway server configuration (mirrors the `server` section of the
/// Tessera config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Assemble the application router from every engine's contributed routes.
///
/// Engines are visited in registration order; the registry must already be
/// configured and frozen. A shared handle to it is injected as a request
/// extension so handlers (the diagnostics endpoint, for one) can read the
/// composed state live.
pub fn build_router(registry: &Arc<EngineRegistry>) -> Router {
    let mut registrar = AppRouter::new();
    registry.register_routes(&mut registrar);
    registrar
        .into_router()
        .layer(Extension(Arc::clone(registry)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve the assembled router until a shutdown signal arrives.
pub async fn start_server(
    config: &ServerConfig,
    registry: &Arc<EngineRegistry>,
) -> Result<(), EngineError> {
    let app = build_router(registry);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        EngineError::with_source(format!("failed to bind server to {addr}"), false, e)
    })?;

    tracing::info!(engines = registry.len(), "server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(EngineError::classify)?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(%err, "failed to listen for shutdown signal"),
    }
}
