// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in status engine.
//!
//! Exposes a liveness endpoint and the aggregated diagnostics report over
//! HTTP, plus a `diagnostics` CLI subcommand printing the same report.
//! The report always answers `200 OK` with whatever facts a fresh
//! collection produced -- diagnostics providers are infallible by contract.

use std::sync::Arc;

use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json};

use tessera_core::{Engine, EngineCommand, EngineRegistry, collect, render_text};

/// Create the status engine.
///
/// Routes: `GET /status` answers `"OK"`; `GET /status/diagnostics` renders
/// a point-in-time report, as plain text by default or JSON when the
/// request accepts `application/json`.
pub fn status_engine() -> Engine {
    Engine::new("Status")
        .with_routes(|registrar| {
            registrar.route("/status", get(status_ok));
            registrar.route("/status/diagnostics", get(diagnostics_overview));
        })
        .with_command(diagnostics_command())
}

async fn status_ok() -> &'static str {
    "OK"
}

/// Render a fresh diagnostics report for the HTTP endpoint.
///
/// The registry handle arrives as a request extension, injected when the
/// gateway assembles the router.
async fn diagnostics_overview(
    Extension(registry): Extension<Arc<EngineRegistry>>,
    headers: HeaderMap,
) -> Response {
    let report = collect(&registry);
    if wants_json(&headers) {
        Json(report).into_response()
    } else {
        render_text(&report).into_response()
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

/// The `diagnostics` subcommand: print the text report to stdout.
fn diagnostics_command() -> EngineCommand {
    EngineCommand::new(
        clap::Command::new("diagnostics")
            .about("Print a point-in-time diagnostics report for all registered engines"),
        |registry, _matches| {
            print!("{}", render_text(&collect(registry)));
            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::MethodRouter;
    use tessera_core::RouteRegistrar;
    use tower::ServiceExt;

    use crate::server::build_router;

    #[derive(Default)]
    struct RecordingRegistrar {
        paths: Vec<String>,
    }

    impl RouteRegistrar for RecordingRegistrar {
        fn route(&mut self, path: &str, _handler: MethodRouter) {
            self.paths.push(path.to_string());
        }
    }

    fn status_registry() -> Arc<EngineRegistry> {
        let mut registry = EngineRegistry::new();
        registry.register(status_engine());
        registry.register(Engine::new("Logging"));
        Arc::new(registry)
    }

    #[test]
    fn registers_exactly_its_declared_routes_once() {
        let mut registry = EngineRegistry::new();
        registry.register(status_engine());

        let mut registrar = RecordingRegistrar::default();
        registry.register_routes(&mut registrar);

        assert_eq!(registrar.paths, vec!["/status", "/status/diagnostics"]);
    }

    #[test]
    fn contributes_the_diagnostics_subcommand() {
        let engine = status_engine();
        let command = engine.command().expect("status engine has a command");
        assert_eq!(command.name(), "diagnostics");
    }

    #[tokio::test]
    async fn status_endpoint_answers_ok() {
        let response = build_router(&status_registry())
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn diagnostics_endpoint_renders_the_text_report() {
        let response = build_router(&status_registry())
            .oneshot(
                Request::builder()
                    .uri("/status/diagnostics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Registered engines: Status,Logging\n");
    }

    #[tokio::test]
    async fn diagnostics_endpoint_speaks_json_when_asked() {
        let response = build_router(&status_registry())
            .oneshot(
                Request::builder()
                    .uri("/status/diagnostics")
                    .header(header::ACCEPT, "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("\"name\":\"Registered engines\""));
        assert!(text.contains("\"value\":\"Status,Logging\""));
    }
}
