// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered collection of registered engines and the operations driving
//! their shared lifecycle.
//!
//! Registration order is the only ordering guarantee: configure, route
//! registration, command collection, and diagnostics all iterate engines
//! in the order they were registered. The registry performs no dependency
//! resolution and no name deduplication.
//!
//! Lifecycle discipline: build the registry single-threaded, run
//! [`EngineRegistry::configure`] once to completion, then freeze it into an
//! `Arc`. From that point the engine list is read-only and safe to share
//! across tasks without further locking.

use clap::ArgMatches;
use tracing::{debug, error};

use crate::engine::{Engine, EngineCommand};
use crate::error::EngineError;
use crate::routing::RouteRegistrar;

/// Ordered registry of engines.
#[derive(Debug, Default)]
pub struct EngineRegistry {
    engines: Vec<Engine>,
}

impl EngineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            engines: Vec::new(),
        }
    }

    /// Append an engine to the registry.
    ///
    /// No uniqueness check is performed; registering two engines with the
    /// same name keeps both independently iterable.
    pub fn register(&mut self, engine: Engine) {
        debug!(engine = engine.name(), "engine registered");
        self.engines.push(engine);
    }

    /// Run every engine's configure hook in registration order.
    ///
    /// Fail-fast: the first hook that fails stops the iteration and its
    /// error is returned unmodified. Engines already configured are not
    /// rolled back. Absent hooks are skipped.
    pub fn configure(&self) -> Result<(), EngineError> {
        for engine in &self.engines {
            if let Err(err) = engine.configure() {
                error!(engine = engine.name(), %err, "engine configuration failed");
                return Err(err);
            }
            debug!(engine = engine.name(), "engine configured");
        }
        Ok(())
    }

    /// Let every engine contribute its routes, in registration order.
    pub fn register_routes(&self, registrar: &mut dyn RouteRegistrar) {
        for engine in &self.engines {
            engine.register_routes(registrar);
        }
    }

    /// Engine-contributed CLI subcommands, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &EngineCommand> {
        self.engines.iter().filter_map(Engine::command)
    }

    /// Run the contributed subcommand named `name`, if any engine offers
    /// one. Returns `None` when no engine contributes that command.
    pub fn dispatch_command(
        &self,
        name: &str,
        matches: &ArgMatches,
    ) -> Option<Result<(), EngineError>> {
        self.commands()
            .find(|command| command.name() == name)
            .map(|command| command.run(self, matches))
    }

    /// Registration-order engine names, duplicates preserved.
    pub fn names(&self) -> Vec<&str> {
        self.engines.iter().map(Engine::name).collect()
    }

    /// The first registered engine with the given name.
    pub fn get(&self, name: &str) -> Option<&Engine> {
        self.engines.iter().find(|engine| engine.name() == name)
    }

    /// Iterate engines in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Engine> {
        self.engines.iter()
    }

    /// Number of registered engines.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether no engines are registered.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::routing::MethodRouter;

    /// Route-registration mock recording every registered path.
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
    fn register_adds_an_engine_to_the_list() {
        let mut registry = EngineRegistry::new();
        assert!(registry.is_empty());

        registry.register(Engine::new("Status"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_preserve_registration_order_and_duplicates() {
        let mut registry = EngineRegistry::new();
        registry.register(Engine::new("Status"));
        registry.register(Engine::new("Logging"));
        registry.register(Engine::new("Status"));

        assert_eq!(registry.names(), vec!["Status", "Logging", "Status"]);
    }

    #[test]
    fn configure_runs_hooks_in_registration_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut registry = EngineRegistry::new();
        for name in ["a", "b", "c"] {
            let order = Arc::clone(&order);
            registry.register(Engine::new(name).with_configure(move || {
                order.lock().unwrap().push(name);
                Ok(())
            }));
        }

        registry.configure().unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn configure_skips_engines_without_a_hook() {
        let mut registry = EngineRegistry::new();
        registry.register(Engine::new("Bare"));
        registry.register(Engine::new("Hooked").with_configure(|| Ok(())));

        assert!(registry.configure().is_ok());
    }

    #[test]
    fn configure_fails_fast_and_returns_the_failing_hooks_error() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let mut registry = EngineRegistry::new();

        let count = Arc::clone(&invoked);
        registry.register(Engine::new("first").with_configure(move || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));

        let count = Arc::clone(&invoked);
        registry.register(Engine::new("second").with_configure(move || {
            count.fetch_add(1, Ordering::SeqCst);
            Err(EngineError::new("second refused to start", true))
        }));

        let count = Arc::clone(&invoked);
        registry.register(Engine::new("third").with_configure(move || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));

        let err = registry.configure().unwrap_err();
        assert_eq!(err.to_string(), "second refused to start");
        assert!(err.recoverable(), "flag must pass through unmodified");
        assert_eq!(
            invoked.load(Ordering::SeqCst),
            2,
            "hooks after the failure must never run"
        );
    }

    #[test]
    fn register_routes_visits_engines_in_order() {
        let mut registry = EngineRegistry::new();
        registry.register(Engine::new("Status").with_routes(|registrar| {
            registrar.route("/status", axum::routing::get(|| async { "OK" }));
        }));
        registry.register(Engine::new("Quiet"));
        registry.register(Engine::new("Metrics").with_routes(|registrar| {
            registrar.route("/metrics", axum::routing::get(|| async { "" }));
        }));

        let mut registrar = RecordingRegistrar::default();
        registry.register_routes(&mut registrar);

        assert_eq!(registrar.paths, vec!["/status", "/metrics"]);
    }

    #[test]
    fn commands_collects_in_order_skipping_engines_without_one() {
        let mut registry = EngineRegistry::new();
        registry.register(Engine::new("Status").with_command(EngineCommand::new(
            clap::Command::new("diagnostics"),
            |_, _| Ok(()),
        )));
        registry.register(Engine::new("Quiet"));
        registry.register(Engine::new("Backup").with_command(EngineCommand::new(
            clap::Command::new("backup"),
            |_, _| Ok(()),
        )));

        let names: Vec<&str> = registry.commands().map(EngineCommand::name).collect();
        assert_eq!(names, vec!["diagnostics", "backup"]);
    }

    #[test]
    fn dispatch_command_runs_the_matching_engine_command() {
        let ran = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&ran);

        let mut registry = EngineRegistry::new();
        registry.register(Engine::new("Status").with_command(EngineCommand::new(
            clap::Command::new("diagnostics"),
            move |_, _| {
                count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        )));

        let matches = clap::Command::new("diagnostics").get_matches_from(["diagnostics"]);
        let result = registry.dispatch_command("diagnostics", &matches);
        assert!(matches!(result, Some(Ok(()))));
        assert_eq!(ran.load(Ordering::SeqCst), 1);

        assert!(registry.dispatch_command("unknown", &matches).is_none());
    }

    #[test]
    fn get_returns_the_first_engine_with_a_name() {
        let mut registry = EngineRegistry::new();
        registry.register(Engine::new("Status").with_configure(|| Ok(())));
        registry.register(Engine::new("Status"));

        let found = registry.get("Status").expect("engine exists");
        assert!(format!("{found:?}").contains("configure: true"));
        assert!(registry.get("Missing").is_none());
    }
}
