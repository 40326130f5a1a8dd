// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The unit of composition: a named bundle of optional lifecycle
//! capabilities.
//!
//! An [`Engine`] is a flat capability record, not a trait hierarchy: each
//! slot (configure, routes, command, diagnostics) is optional, and an
//! absent slot is a no-op when the registry drives the lifecycle. Concrete
//! engines are built with the `with_*` builder methods.

use std::fmt;

use clap::ArgMatches;

use crate::diagnostics::DiagnosticResult;
use crate::error::EngineError;
use crate::registry::EngineRegistry;
use crate::routing::RouteRegistrar;

/// One-time configuration hook, run before the process is considered ready.
pub type ConfigureHook = Box<dyn Fn() -> Result<(), EngineError> + Send + Sync>;

/// Route-contribution hook, called once with the shared route-registration
/// capability.
pub type RoutesHook = Box<dyn Fn(&mut dyn RouteRegistrar) + Send + Sync>;

/// Diagnostics provider: a repeatable, side-effect-free read of current
/// state.
pub type DiagnosticsHook = Box<dyn Fn() -> Vec<DiagnosticResult> + Send + Sync>;

/// Action behind an engine-contributed CLI subcommand. Receives the owning
/// registry so commands like `diagnostics` can read the composed state.
pub type CommandRun =
    Box<dyn Fn(&EngineRegistry, &ArgMatches) -> Result<(), EngineError> + Send + Sync>;

/// A CLI subcommand contributed by an engine: a clap command definition
/// paired with the action to run when it is selected.
///
/// The registry collects these opaquely; only the dispatching binary looks
/// inside.
pub struct EngineCommand {
    command: clap::Command,
    run: CommandRun,
}

impl EngineCommand {
    pub fn new(
        command: clap::Command,
        run: impl Fn(&EngineRegistry, &ArgMatches) -> Result<(), EngineError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            command,
            run: Box::new(run),
        }
    }

    /// The subcommand name used for dispatch.
    pub fn name(&self) -> &str {
        self.command.get_name()
    }

    /// The clap definition, for mounting into a command tree.
    pub fn clap(&self) -> &clap::Command {
        &self.command
    }

    /// Run the command's action.
    pub fn run(&self, registry: &EngineRegistry, matches: &ArgMatches) -> Result<(), EngineError> {
        (self.run)(registry, matches)
    }
}

impl fmt::Debug for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineCommand")
            .field("name", &self.name())
            .finish()
    }
}

/// A named, independently registrable unit contributing optional
/// configuration, routes, CLI command, and diagnostics behavior.
pub struct Engine {
    name: String,
    configure: Option<ConfigureHook>,
    routes: Option<RoutesHook>,
    command: Option<EngineCommand>,
    diagnostics: Option<DiagnosticsHook>,
}

impl Engine {
    /// Create an engine with no capabilities. Name uniqueness within a
    /// registry is a convention, not enforced.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configure: None,
            routes: None,
            command: None,
            diagnostics: None,
        }
    }

    /// Attach a configure hook, invoked once per process lifetime.
    pub fn with_configure(
        mut self,
        hook: impl Fn() -> Result<(), EngineError> + Send + Sync + 'static,
    ) -> Self {
        self.configure = Some(Box::new(hook));
        self
    }

    /// Attach a route-contribution hook.
    pub fn with_routes(
        mut self,
        hook: impl Fn(&mut dyn RouteRegistrar) + Send + Sync + 'static,
    ) -> Self {
        self.routes = Some(Box::new(hook));
        self
    }

    /// Attach a contributed CLI subcommand.
    pub fn with_command(mut self, command: EngineCommand) -> Self {
        self.command = Some(command);
        self
    }

    /// Attach a diagnostics provider.
    pub fn with_diagnostics(
        mut self,
        hook: impl Fn() -> Vec<DiagnosticResult> + Send + Sync + 'static,
    ) -> Self {
        self.diagnostics = Some(Box::new(hook));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the configure hook. Absent hook is a successful no-op.
    pub fn configure(&self) -> Result<(), EngineError> {
        match &self.configure {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }

    /// Contribute routes to `registrar`. Absent hook is a no-op.
    pub fn register_routes(&self, registrar: &mut dyn RouteRegistrar) {
        if let Some(hook) = &self.routes {
            hook(registrar);
        }
    }

    /// The contributed CLI subcommand, if any.
    pub fn command(&self) -> Option<&EngineCommand> {
        self.command.as_ref()
    }

    /// Current diagnostic facts. Absent provider contributes nothing.
    pub fn diagnostics(&self) -> Vec<DiagnosticResult> {
        match &self.diagnostics {
            Some(hook) => hook(),
            None => Vec::new(),
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("name", &self.name)
            .field("configure", &self.configure.is_some())
            .field("routes", &self.routes.is_some())
            .field("command", &self.command.as_ref().map(EngineCommand::name))
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}
