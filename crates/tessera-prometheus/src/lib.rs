// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in metrics engine exposing Prometheus metrics over HTTP.
//!
//! Uses the metrics-rs facade with the Prometheus exporter. The recorder is
//! installed during the engine's configure phase; collected metrics are
//! rendered in Prometheus text format on `GET /metrics`.

pub mod scope;

use std::sync::OnceLock;

use axum::routing::get;
use metrics::describe_gauge;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use tessera_core::{Engine, EngineError};

pub use scope::{METRICS_PREFIX, MetricScope};

/// Render handle for the process-wide Prometheus recorder.
///
/// The recorder is inherently process-global (only one can be installed),
/// so the handle lives behind one-time initialization rather than inside
/// the engine value.
static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Create the metrics engine.
///
/// Configure installs the Prometheus recorder; a second installation
/// attempt in the same process is a non-recoverable configuration failure.
/// Routes: `GET /metrics` renders all collected metrics in Prometheus text
/// format.
pub fn metrics_engine() -> Engine {
    Engine::new("Metrics")
        .with_configure(configure)
        .with_routes(|registrar| {
            registrar.route("/metrics", get(render_metrics));
        })
}

fn configure() -> Result<(), EngineError> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        EngineError::with_source("failed to install Prometheus recorder", false, e)
    })?;
    register_metrics();
    let _ = HANDLE.set(handle);

    tracing::info!("prometheus metrics recorder installed");
    Ok(())
}

/// Register framework-level metric descriptions.
///
/// Called once at startup after the recorder is installed.
fn register_metrics() {
    describe_gauge!(
        "tessera_engines_registered",
        "Engines registered at startup"
    );
}

/// Set the number of registered engines.
pub fn set_registered_engines(count: f64) {
    metrics::gauge!("tessera_engines_registered").set(count);
}

async fn render_metrics() -> String {
    HANDLE.get().map(PrometheusHandle::render).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::routing::MethodRouter;
    use tessera_core::{EngineRegistry, RouteRegistrar};

    #[derive(Default)]
    struct RecordingRegistrar {
        paths: Vec<String>,
    }

    impl RouteRegistrar for RecordingRegistrar {
        fn route(&mut self, path: &str, _handler: MethodRouter) {
            self.paths.push(path.to_string());
        }
    }

    #[test]
    fn registers_exactly_the_metrics_route() {
        let mut registry = EngineRegistry::new();
        registry.register(metrics_engine());

        let mut registrar = RecordingRegistrar::default();
        registry.register_routes(&mut registrar);

        assert_eq!(registrar.paths, vec!["/metrics"]);
    }

    #[tokio::test]
    async fn configure_installs_the_recorder_and_metrics_render() {
        // The recorder can only be installed once per process; this is the
        // single test that does so.
        metrics_engine().configure().expect("first install succeeds");

        set_registered_engines(3.0);
        let rendered = render_metrics().await;
        assert!(rendered.contains("tessera_engines_registered"));

        // A second configure attempt must fail fast with a non-recoverable
        // classified error.
        let err = metrics_engine().configure().unwrap_err();
        assert!(!err.recoverable());
        assert!(err.to_string().contains("Prometheus recorder"));
    }
}
